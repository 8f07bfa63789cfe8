use sha1::{Digest, Sha1};
use strum::EnumString;
use uuid::Uuid;

///
/// Way of generating ticket ids
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum IdStrategy {
    ///
    /// Hex encoded SHA-1 of `created_at + user + title`.
    ///
    /// Deterministic: tickets with the same user and title
    /// created within the same second get the same id.
    ///
    ContentDigest,

    ///
    /// UUID v4 unrelated to the ticket content
    ///
    Random,
}

impl IdStrategy {
    ///
    /// Generates ticket id.
    /// `created_at` is expected to be already formatted the way it is stored
    ///
    pub fn generate(&self, user: &str, title: &str, created_at: &str) -> String {
        match self {
            IdStrategy::ContentDigest => {
                let mut hasher = Sha1::new();
                hasher.update(created_at);
                hasher.update(user);
                hasher.update(title);

                hex::encode(hasher.finalize())
            }
            IdStrategy::Random => Uuid::new_v4().to_string(),
        }
    }

    ///
    /// Whether generating id again for the same input may give a different result
    ///
    pub fn is_random(&self) -> bool {
        matches!(self, IdStrategy::Random)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    const CREATED_AT: &str = "2024-01-02T03:04:05Z";

    #[test]
    fn parse_strategies() {
        assert_eq!(
            "content_digest".parse::<IdStrategy>().unwrap(),
            IdStrategy::ContentDigest
        );
        assert_eq!("random".parse::<IdStrategy>().unwrap(), IdStrategy::Random);
        assert!("sha1".parse::<IdStrategy>().is_err());
    }

    #[test]
    fn content_digest_known_value() {
        let id = IdStrategy::ContentDigest.generate("alice", "printer jam", CREATED_AT);

        assert_eq!(id, "02231228d5b5e8b85b283d597d8b2fe437b3de2f");
    }

    #[test]
    fn content_digest_deterministic() {
        let id_1 = IdStrategy::ContentDigest.generate("alice", "printer jam", CREATED_AT);
        let id_2 = IdStrategy::ContentDigest.generate("alice", "printer jam", CREATED_AT);

        assert_eq!(id_1, id_2);
    }

    #[test]
    fn content_digest_depends_on_every_input() {
        let id = IdStrategy::ContentDigest.generate("alice", "printer jam", CREATED_AT);

        let other_user = IdStrategy::ContentDigest.generate("bob", "printer jam", CREATED_AT);
        let other_title = IdStrategy::ContentDigest.generate("alice", "coffee", CREATED_AT);
        let other_time =
            IdStrategy::ContentDigest.generate("alice", "printer jam", "2024-01-02T03:04:06Z");

        assert_ne!(id, other_user);
        assert_ne!(id, other_title);
        assert_ne!(id, other_time);
        assert_eq!(other_time, "77e91a07510257d80ed1a8a49affc6d2a1a573b7");
    }

    #[test]
    fn content_digest_hex_encoded() {
        let id = IdStrategy::ContentDigest.generate("alice", "printer jam", CREATED_AT);

        assert_eq!(id.len(), 40);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn random_is_uuid_v4() {
        let id = IdStrategy::Random.generate("alice", "printer jam", CREATED_AT);

        let uuid = Uuid::parse_str(&id).unwrap();
        assert_eq!(uuid.get_version_num(), 4);
    }

    #[test]
    fn random_unique_for_identical_input() {
        const COUNT: usize = 10_000;

        let ids = (0..COUNT)
            .map(|_| IdStrategy::Random.generate("alice", "printer jam", CREATED_AT))
            .collect::<HashSet<_>>();

        assert_eq!(ids.len(), COUNT);
    }
}

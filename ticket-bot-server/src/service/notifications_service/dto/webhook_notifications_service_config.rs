pub struct WebhookNotificationsServiceConfig {
    /// Base of links to tickets. Ends with `/`
    pub public_url: String,
}

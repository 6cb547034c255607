pub mod net;

use crate::constants::DEFAULT_SERVER_URL;

pub struct ClientConfig {
    pub server_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_owned(),
        }
    }
}

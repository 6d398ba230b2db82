use super::Result;
use mongodb::{options::ClientOptions, Client};
use std::time::Duration;

impl Default for ConnectionParams {
    fn default() -> Self {
        Self {
            user: String::new(),
            password: String::new(),
            host: "localhost".to_string(),
            port: 27017,
            database: "aac".to_string(),
            collection: "animals".to_string(),
            auth_source: "admin".to_string(),
            server_selection_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConnectionParams {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub collection: String,
    pub auth_source: String,
    pub server_selection_timeout: Duration,
}

impl ConnectionParams {
    /// Connection string for these parameters. Credentials are
    /// percent-encoded; an empty user omits the credential segment.
    pub fn uri(&self) -> String {
        let credentials = if self.user.is_empty() {
            String::new()
        } else {
            format!(
                "{}:{}@",
                urlencoding::encode(&self.user),
                urlencoding::encode(&self.password)
            )
        };

        format!(
            "mongodb://{}{}:{}/?authSource={}&serverSelectionTimeoutMS={}",
            credentials,
            self.host,
            self.port,
            self.auth_source,
            self.server_selection_timeout.as_millis()
        )
    }

    pub async fn build(&self) -> Result<Client> {
        let uri = self.uri();
        let options = ClientOptions::parse(uri.as_str()).await?;

        Ok(Client::with_options(options)?)
    }
}

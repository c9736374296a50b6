use clap::Args;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Where the HTTP server listens.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "RECEIPT_POINTS_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "RECEIPT_POINTS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        server: ServerConfig,
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = TestCli::parse_from(["test", "--host", "127.0.0.1", "--port", "3000"]);
        assert_eq!(cli.server.socket_addr(), "127.0.0.1:3000");
    }
}

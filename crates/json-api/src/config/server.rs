//! Server Config

use clap::Args;

/// Address and port the HTTP listener binds to.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to bind, IPv4 or IPv6
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "8080")]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// Bind address in `host:port` form, bracketing bare IPv6 hosts.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str, port: u16) -> ServerRuntimeConfig {
        ServerRuntimeConfig {
            host: host.to_string(),
            port,
        }
    }

    #[test]
    fn ipv4_hosts_are_joined_with_the_port() {
        assert_eq!(config("127.0.0.1", 3000).socket_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn ipv6_hosts_are_bracketed() {
        assert_eq!(config("::", 8080).socket_addr(), "[::]:8080");
        assert_eq!(config("[::1]", 8080).socket_addr(), "[::1]:8080");
    }
}

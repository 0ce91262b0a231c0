use crate::domain::model::ParsedHostPort;

const SEPARATOR: char = ':';

/// Split `host:port`, accepting any number of colons in the host part as long
/// as the final segment is a 32-bit integer.
///
/// Failure is reported through `ok == false` rather than an error.
pub fn parse_host_and_port(host_and_port: &str) -> ParsedHostPort {
    let Some((host, port)) = host_and_port.rsplit_once(SEPARATOR) else {
        return ParsedHostPort::failed();
    };

    match port.trim().parse::<i32>() {
        Ok(port) => ParsedHostPort::parsed(host.to_string(), port),
        Err(e) => {
            tracing::debug!(input = host_and_port, error = %e, "port segment is not an integer");
            ParsedHostPort::failed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_host_and_port() {
        assert_eq!(
            parse_host_and_port("pool.example.com:3333"),
            ParsedHostPort::parsed("pool.example.com".to_string(), 3333)
        );
    }

    #[test]
    fn test_parse_without_colon() {
        assert_eq!(parse_host_and_port("noport"), ParsedHostPort::failed());
        assert_eq!(parse_host_and_port(""), ParsedHostPort::failed());
    }

    #[test]
    fn test_parse_multi_segment_host() {
        let parsed = parse_host_and_port("a:b:3333");
        assert!(parsed.ok);
        assert_eq!(parsed.host, "a:b");
        assert_eq!(parsed.port, 3333);

        let parsed = parse_host_and_port("stratum+tcp://pool.example.com:3333");
        assert_eq!(parsed.host, "stratum+tcp://pool.example.com");
        assert_eq!(parsed.port, 3333);
    }

    #[test]
    fn test_parse_non_numeric_port() {
        assert_eq!(parse_host_and_port("pool.example.com:http"), ParsedHostPort::failed());
        assert_eq!(parse_host_and_port("pool.example.com:"), ParsedHostPort::failed());
        assert_eq!(parse_host_and_port("a:3333:b"), ParsedHostPort::failed());
    }

    #[test]
    fn test_parse_port_out_of_i32_range() {
        assert!(!parse_host_and_port("host:2147483648").ok);
        assert_eq!(parse_host_and_port("host:2147483647").port, i32::MAX);
    }

    #[test]
    fn test_parse_signed_and_padded_port() {
        assert_eq!(parse_host_and_port("host:-1").port, -1);
        assert_eq!(parse_host_and_port("host:+80").port, 80);
        assert_eq!(parse_host_and_port("host: 8080 ").port, 8080);
    }

    #[test]
    fn test_parse_empty_host_segments_kept() {
        assert_eq!(parse_host_and_port(":3333").host, "");
        assert_eq!(parse_host_and_port("a::3333").host, "a:");
        assert_eq!(parse_host_and_port(":a:3333").host, ":a");
        assert!(parse_host_and_port(":3333").ok);
    }
}

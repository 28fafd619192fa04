//! HTTP date formatting.
//!
//! Formatting is stateless; each call is independent and safe to issue
//! from any thread.

use http::HeaderValue;
use httpdate::fmt_http_date;
use std::time::SystemTime;

/// Formats a timestamp as an IMF-fixdate header value, for example
/// `Sun, 06 Nov 1994 08:49:37 GMT`.
pub fn http_date(time: SystemTime) -> HeaderValue {
    let formatted = fmt_http_date(time);
    // fmt_http_date only emits visible ASCII
    HeaderValue::from_str(&formatted).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn formats_the_epoch() {
        assert_eq!(http_date(SystemTime::UNIX_EPOCH), HeaderValue::from_static("Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn formats_an_arbitrary_timestamp() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(784_111_777);
        assert_eq!(http_date(time), HeaderValue::from_static("Sun, 06 Nov 1994 08:49:37 GMT"));
    }
}

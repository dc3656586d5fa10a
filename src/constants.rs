/// Seconds a freshly issued bearer token is treated as valid by this
/// client. The server expires tokens after roughly five minutes; the
/// shorter window forces a proactive refresh before that happens.
pub const TOKEN_VALIDITY_SECONDS: i64 = 260;

/// Production token-issuing endpoint of Correos de Costa Rica
pub const DEFAULT_TOKEN_URL: &str = "https://servicios.correos.go.cr:442/Token/authenticate";

/// Envelope response code the upstream service uses to signal success
pub const SUCCESS_CODE: &str = "00";

/// XML namespace of the upstream SOAP operations
pub const SOAP_NAMESPACE: &str = "http://tempuri.org/";

/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "ccr-gateway/0.1.0";

/// Default port for the HTTP gateway
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default host for the HTTP gateway
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

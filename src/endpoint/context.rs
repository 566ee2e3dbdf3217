//! Providers of the addressing context consumed by [`super::derive_from`].
use axum::http::{
    header::{HeaderMap, HeaderValue, HOST},
    uri::Authority,
    Uri,
};

use super::{AddressContext, Scheme};
use crate::lib::errors::AddressError;

const FORWARDED_HOST: &str = "x-forwarded-host";
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Something that knows where the client is being served from.
///
/// `Ok(None)` means no addressing context exists (e.g. nothing to read from);
/// `Err` is an unexpected fault while reading it.
pub trait AddressSource {
    fn address_context(&self) -> Result<Option<AddressContext>, AddressError>;
}

impl AddressSource for AddressContext {
    fn address_context(&self) -> Result<Option<AddressContext>, AddressError> {
        Ok(Some(self.clone()))
    }
}

/// Absolute URL such as the page location `http://localhost:3000/`.
#[derive(Debug, Clone, Copy)]
pub struct UrlAddress<'a>(pub &'a str);

impl AddressSource for UrlAddress<'_> {
    fn address_context(&self) -> Result<Option<AddressContext>, AddressError> {
        let uri: Uri = self.0.trim().parse().map_err(|err: axum::http::uri::InvalidUri| {
            AddressError::InvalidUrl {
                value: self.0.to_string(),
                reason: err.to_string(),
            }
        })?;
        let Some(authority) = uri.authority() else {
            return Ok(None);
        };

        Ok(Some(context_from_authority(
            authority,
            uri.scheme_str().and_then(Scheme::parse),
        )))
    }
}

/// Incoming HTTP request headers.
#[derive(Debug, Clone, Copy)]
pub struct RequestAddress<'a> {
    headers: &'a HeaderMap,
    trust_forwarded: bool,
}

impl<'a> RequestAddress<'a> {
    pub fn new(headers: &'a HeaderMap, trust_forwarded: bool) -> Self {
        Self {
            headers,
            trust_forwarded,
        }
    }

    fn host_header(&self) -> Option<&'a HeaderValue> {
        if self.trust_forwarded {
            if let Some(value) = self.headers.get(FORWARDED_HOST) {
                return Some(value);
            }
        }
        self.headers.get(HOST)
    }

    fn forwarded_scheme(&self) -> Option<Scheme> {
        if !self.trust_forwarded {
            return None;
        }
        let value = self.headers.get(FORWARDED_PROTO)?.to_str().ok()?;
        first_list_item(value).and_then(Scheme::parse)
    }
}

impl AddressSource for RequestAddress<'_> {
    fn address_context(&self) -> Result<Option<AddressContext>, AddressError> {
        let Some(value) = self.host_header() else {
            return Ok(None);
        };
        let raw = value.to_str().map_err(|err| AddressError::MalformedHost {
            value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
            reason: err.to_string(),
        })?;

        let Some(host) = first_list_item(raw) else {
            return Ok(Some(AddressContext::default()));
        };
        let authority: Authority = host.parse().map_err(|err: axum::http::uri::InvalidUri| {
            AddressError::MalformedHost {
                value: raw.to_string(),
                reason: err.to_string(),
            }
        })?;

        Ok(Some(context_from_authority(
            &authority,
            self.forwarded_scheme(),
        )))
    }
}

/// Normalise the way a browser location does: lowercase host, and no port
/// when it is the default of the known page scheme.
fn context_from_authority(authority: &Authority, scheme: Option<Scheme>) -> AddressContext {
    let port = authority
        .port()
        .map(|port| port.as_str().to_string())
        .filter(|port| scheme.map_or(true, |scheme| port != scheme.default_port()));

    AddressContext {
        scheme,
        hostname: Some(authority.host().to_ascii_lowercase()),
        port,
    }
}

/// Proxies may append to forwarded headers; the first entry is the client-facing one.
fn first_list_item(value: &str) -> Option<&str> {
    value
        .split(',')
        .next()
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

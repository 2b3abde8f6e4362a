use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// How the public URL of a stored object is derived from the storage settings.
///
/// Providers disagree on their public URL scheme, so this is configuration
/// rather than a hard-coded pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlStyle {
    /// `{endpoint}/{bucket}/{key}`
    #[default]
    Path,
    /// `{scheme}://{bucket}.{endpoint host}/{key}`
    VirtualHost,
    /// `{public_base_url}/{key}`
    PublicBase,
}

impl FromStr for UrlStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "path" => Ok(UrlStyle::Path),
            "virtual-host" | "virtual_host" | "virtual" => Ok(UrlStyle::VirtualHost),
            "public-base" | "public_base" | "public" => Ok(UrlStyle::PublicBase),
            _ => Err(anyhow::anyhow!("Invalid storage URL style: {}", s)),
        }
    }
}

impl Display for UrlStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UrlStyle::Path => write!(f, "path"),
            UrlStyle::VirtualHost => write!(f, "virtual-host"),
            UrlStyle::PublicBase => write!(f, "public-base"),
        }
    }
}

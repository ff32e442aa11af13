use serde::Deserialize;

/// Настройки отображения счёта
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InvoiceConfig {
    /// Currency suffix appended to every amount
    pub currency: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
    /// Maximum number of fraction digits kept when formatting amounts
    pub max_fraction_digits: u8,
    /// Minimum price mentioned in the note block
    pub minimum_price: f64,
    /// Delay between hiding an overlay and removing it from the page
    pub close_delay_ms: u32,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            currency: "FCFA".to_string(),
            thousands_separator: '\u{202F}',
            decimal_separator: ',',
            max_fraction_digits: 3,
            minimum_price: 10_000.0,
            close_delay_ms: 300,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
struct ConfigFile {
    #[serde(default)]
    invoice: InvoiceConfig,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[invoice]
currency = "FCFA"
thousands_separator = "\u202F"
decimal_separator = ","
max_fraction_digits = 3
minimum_price = 10000.0
close_delay_ms = 300
"#;

/// Load the invoice configuration.
///
/// `source` is a TOML document supplied by the host page; when it is absent
/// the embedded default is used.
pub fn load_config(source: Option<&str>) -> anyhow::Result<InvoiceConfig> {
    if let Some(contents) = source {
        log::info!("Loading invoice config from supplied document");
        let config: ConfigFile = toml::from_str(contents)?;
        return Ok(config.invoice);
    }

    log::info!("Using default embedded invoice configuration");
    let config: ConfigFile = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config.invoice)
}

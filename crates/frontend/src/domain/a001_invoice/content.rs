//! HTML fragment of the invoice body.
//!
//! The same fragment is injected into the on-screen overlay and copied
//! verbatim into the print document, so both always show identical values.

use contracts::domain::a001_invoice::{InvoiceData, Place};

use crate::shared::config::InvoiceConfig;
use crate::shared::html::escape_html;
use crate::shared::number_format::{format_plain, format_price};

pub const TITLE: &str = "FACTURE DE TRANSPORT";
pub const SUBTITLE: &str = "Reçu d'expédition";

pub const SECTION_PACKAGE: &str = "1. Informations sur le colis";
pub const SECTION_SENDER: &str = "2. Informations sur l'expéditeur";
pub const SECTION_RECIPIENT: &str = "3. Informations sur le destinataire";
pub const SECTION_SHIPMENT: &str = "4. Informations sur la cargaison";

pub const NOTE_TEXT: &str = "Conservez ce reçu précieusement. Il vous sera demandé lors de la récupération de votre colis. \
Le code de suivi sera envoyé au destinataire une fois la cargaison arrivée à destination.";

/// Badge colour for state values
#[derive(Debug, Clone, Copy)]
enum Tone {
    Blue,
    Yellow,
}

impl Tone {
    fn classes(self) -> &'static str {
        match self {
            Tone::Blue => "px-2 py-1 bg-blue-100 text-blue-800 rounded",
            Tone::Yellow => "px-2 py-1 bg-yellow-100 text-yellow-800 rounded",
        }
    }
}

/// One `label: value` cell of a section grid. `value` is already HTML.
fn field(label: &str, value: String) -> String {
    format!("<div><strong>{}:</strong> {}</div>", label, value)
}

fn text(value: &str) -> String {
    escape_html(value)
}

fn badge(value: &str, tone: Tone) -> String {
    format!("<span class=\"{}\">{}</span>", tone.classes(), escape_html(value))
}

fn place(p: &Place) -> String {
    format!(
        "{} ({}, {})",
        escape_html(&p.name),
        format_plain(p.lat),
        format_plain(p.lon)
    )
}

fn section(title: &str, heading_bg: &str, fields: &[String]) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"mb-8\">");
    html.push_str(&format!(
        "<h3 class=\"text-lg font-semibold text-gray-800 mb-4 {} p-3 rounded\">🔹 {}</h3>",
        heading_bg, title
    ));
    html.push_str("<div class=\"grid grid-cols-2 gap-4\">");
    for f in fields {
        html.push_str(f);
    }
    html.push_str("</div></div>");
    html
}

/// Build the four invoice sections and the closing note.
pub fn format_content(data: &InvoiceData, cfg: &InvoiceConfig) -> String {
    let price = format_price(data.computed_price, cfg);

    let package = section(
        SECTION_PACKAGE,
        "bg-blue-50",
        &[
            field("Code de suivi", text(&data.package.tracking_code)),
            field("Libellé", format!("\"{}\"", text(&data.package.label))),
            field("Poids", format!("{} kg", format_plain(data.package.weight_kg))),
            field("Type de produit", text(&data.package.product_type)),
            field("Type de cargaison", text(&data.shipment.shipment_type)),
            field(
                "Prix à payer",
                format!("<span class=\"text-green-600 font-bold\">{}</span>", price),
            ),
            field("État actuel", badge(&data.package.state, Tone::Yellow)),
        ],
    );

    let mut sender_fields = vec![
        field("Nom", text(&data.sender.last_name)),
        field("Prénom", text(&data.sender.first_name)),
        field("Téléphone", text(&data.sender.phone)),
        field("Adresse", text(&data.sender.address)),
    ];
    if let Some(email) = data.sender.email() {
        sender_fields.push(field("Email", text(email)));
    }
    let sender = section(SECTION_SENDER, "bg-green-50", &sender_fields);

    let recipient = section(
        SECTION_RECIPIENT,
        "bg-purple-50",
        &[
            field("Nom", text(&data.recipient.last_name)),
            field("Prénom", text(&data.recipient.first_name)),
            field("Téléphone", text(&data.recipient.phone)),
            field("Adresse", text(&data.recipient.address)),
        ],
    );

    let shipment = section(
        SECTION_SHIPMENT,
        "bg-orange-50",
        &[
            field("Numéro de cargaison", text(&data.shipment.number)),
            field("Type", text(&data.shipment.shipment_type)),
            field("État global", badge(&data.shipment.global_state, Tone::Blue)),
            field(
                "État d'avancement",
                badge(&data.shipment.progress_state, Tone::Yellow),
            ),
            field("Lieu de départ", place(&data.shipment.origin)),
            field("Lieu d'arrivée", place(&data.shipment.destination)),
            field(
                "Distance estimée",
                format!("{} km", format_plain(data.shipment.distance_km)),
            ),
        ],
    );

    let note = format!(
        "<div class=\"bg-gray-50 p-4 rounded-lg border-l-4 border-blue-500\">\
         <p class=\"text-sm text-gray-700\"><strong>Note:</strong> {}</p>\
         <p class=\"text-sm text-gray-700 mt-2\"><strong>Prix calculé:</strong> {} (minimum {})</p>\
         </div>",
        NOTE_TEXT,
        price,
        format_price(cfg.minimum_price, cfg)
    );

    [package, sender, recipient, shipment, note].concat()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use contracts::domain::a001_invoice::{
        PackageSummary, RecipientInfo, SenderInfo, ShipmentSummary,
    };

    pub(crate) fn sample_invoice() -> InvoiceData {
        InvoiceData {
            package: PackageSummary {
                tracking_code: "TRK-0001".to_string(),
                label: "Documents".to_string(),
                weight_kg: 2.5,
                product_type: "Fragile".to_string(),
                state: "En attente".to_string(),
            },
            shipment: ShipmentSummary {
                number: "CRG-42".to_string(),
                shipment_type: "Aérienne".to_string(),
                global_state: "Ouvert".to_string(),
                progress_state: "En cours".to_string(),
                origin: Place {
                    name: "Dakar".to_string(),
                    lat: 14.69,
                    lon: -17.44,
                },
                destination: Place {
                    name: "Paris".to_string(),
                    lat: 48.85,
                    lon: 2.35,
                },
                distance_km: 4200.0,
            },
            sender: SenderInfo {
                last_name: "Diop".to_string(),
                first_name: "Awa".to_string(),
                phone: "+221 77 000 00 00".to_string(),
                address: "Rue 10, Dakar".to_string(),
                email: Some("awa@example.com".to_string()),
            },
            recipient: RecipientInfo {
                last_name: "Martin".to_string(),
                first_name: "Paul".to_string(),
                phone: "+33 6 00 00 00 00".to_string(),
                address: "1 rue de Rivoli, Paris".to_string(),
            },
            computed_price: 125000.0,
        }
    }

    pub(crate) fn test_config() -> InvoiceConfig {
        InvoiceConfig {
            thousands_separator: ' ',
            ..InvoiceConfig::default()
        }
    }

    #[test]
    fn test_sections_and_note_present() {
        let html = format_content(&sample_invoice(), &test_config());
        for title in [SECTION_PACKAGE, SECTION_SENDER, SECTION_RECIPIENT, SECTION_SHIPMENT] {
            assert!(html.contains(title), "missing section {}", title);
        }
        assert!(html.contains(NOTE_TEXT));
    }

    #[test]
    fn test_email_line_only_when_present() {
        let mut data = sample_invoice();
        let cfg = test_config();

        let html = format_content(&data, &cfg);
        assert!(html.contains("<strong>Email:</strong> awa@example.com"));

        data.sender.email = None;
        let html = format_content(&data, &cfg);
        assert!(!html.contains("Email:"));

        data.sender.email = Some(String::new());
        let html = format_content(&data, &cfg);
        assert!(!html.contains("Email:"));
    }

    #[test]
    fn test_price_grouped_with_currency() {
        let html = format_content(&sample_invoice(), &test_config());
        assert!(html.contains("<span class=\"text-green-600 font-bold\">125 000 FCFA</span>"));
        assert!(html.contains("<strong>Prix calculé:</strong> 125 000 FCFA (minimum 10 000 FCFA)"));
    }

    #[test]
    fn test_shipment_details() {
        let html = format_content(&sample_invoice(), &test_config());
        assert!(html.contains("<strong>Lieu de départ:</strong> Dakar (14.69, -17.44)"));
        assert!(html.contains("<strong>Lieu d'arrivée:</strong> Paris (48.85, 2.35)"));
        assert!(html.contains("<strong>Distance estimée:</strong> 4200 km"));
        assert!(html.contains("<strong>Poids:</strong> 2.5 kg"));
        assert!(html.contains("<strong>Libellé:</strong> \"Documents\""));
        assert!(html.contains(">Ouvert</span>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut data = sample_invoice();
        data.package.label = "<script>alert(1)</script>".to_string();
        data.recipient.address = "Rue \"A\" & B".to_string();

        let html = format_content(&data, &test_config());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Rue &quot;A&quot; &amp; B"));
    }
}

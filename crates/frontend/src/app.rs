use contracts::domain::a001_invoice::{
    InvoiceData, PackageSummary, Place, RecipientInfo, SenderInfo, ShipmentSummary,
};
use leptos::prelude::*;

use crate::domain::a001_invoice::{InvoiceHost, InvoicePresenter};
use crate::shared::config::{load_config, InvoiceConfig};

#[component]
pub fn App() -> impl IntoView {
    let config = load_config(None).unwrap_or_else(|e| {
        log::warn!("Invoice config rejected, using defaults: {}", e);
        InvoiceConfig::default()
    });

    // Provide InvoicePresenter for every page that needs to show an invoice
    let presenter = InvoicePresenter::new(config);
    provide_context(presenter);

    let open_invoice = move |_| {
        presenter.show(demo_invoice());
    };

    view! {
        <main style="padding: 2rem; font-family: Arial, sans-serif;">
            <h1>"Expéditions"</h1>
            <button class="button button--primary" on:click=open_invoice>
                "Afficher la facture"
            </button>
        </main>
        <InvoiceHost />
    }
}

fn demo_invoice() -> InvoiceData {
    InvoiceData {
        package: PackageSummary {
            tracking_code: "TRK-2026-000184".to_string(),
            label: "Pièces détachées".to_string(),
            weight_kg: 12.5,
            product_type: "Matériel".to_string(),
            state: "En attente".to_string(),
        },
        shipment: ShipmentSummary {
            number: "CRG-0042".to_string(),
            shipment_type: "Maritime".to_string(),
            global_state: "Ouvert".to_string(),
            progress_state: "En attente".to_string(),
            origin: Place {
                name: "Dakar".to_string(),
                lat: 14.6928,
                lon: -17.4467,
            },
            destination: Place {
                name: "Abidjan".to_string(),
                lat: 5.36,
                lon: -4.0083,
            },
            distance_km: 1750.0,
        },
        sender: SenderInfo {
            last_name: "Ndiaye".to_string(),
            first_name: "Fatou".to_string(),
            phone: "+221 77 123 45 67".to_string(),
            address: "Avenue Cheikh Anta Diop, Dakar".to_string(),
            email: Some("fatou.ndiaye@example.com".to_string()),
        },
        recipient: RecipientInfo {
            last_name: "Kouassi".to_string(),
            first_name: "Jean".to_string(),
            phone: "+225 07 00 11 22 33".to_string(),
            address: "Boulevard Latrille, Cocody, Abidjan".to_string(),
        },
        computed_price: 87500.0,
    }
}

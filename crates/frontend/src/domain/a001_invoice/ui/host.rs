use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::domain::a001_invoice::content::{SUBTITLE, TITLE};
use crate::domain::a001_invoice::document::INVOICE_STYLES;
use crate::domain::a001_invoice::registry::{OverlayEntry, OverlayPhase};
use crate::domain::a001_invoice::service::InvoicePresenter;
use crate::shared::date_utils::{format_date_fr, format_time_fr};

/// Renders every open invoice overlay.
///
/// Must be mounted exactly once, below the `InvoicePresenter` context.
#[component]
pub fn InvoiceHost() -> impl IntoView {
    let presenter = use_context::<InvoicePresenter>()
        .expect("InvoicePresenter not provided in context (provide it in app root)");

    // Global Escape handler: closes only the topmost visible invoice.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && presenter.has_visible() {
                    if let Err(e) = presenter.close_topmost() {
                        log::warn!("Escape: {}", e);
                    }
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // InvoiceHost lives as long as the app; keep the closure alive.
            closure.forget();
        }
    });

    view! {
        <style>{INVOICE_STYLES}</style>
        <For
            each=move || {
                presenter.entries().into_iter().enumerate().collect::<Vec<_>>()
            }
            key=|(_, entry)| entry.handle
            children=move |(idx, entry)| {
                view! { <InvoiceOverlay presenter=presenter entry=entry z_index={1000 + idx as i32} /> }
            }
        />
    }
}

/// One invoice: overlay, header, content and action buttons.
#[component]
fn InvoiceOverlay(presenter: InvoicePresenter, entry: OverlayEntry, z_index: i32) -> impl IntoView {
    let handle = entry.handle;
    let transition_ms = presenter.config().close_delay_ms;

    let overlay_style = move || {
        let shown = presenter
            .phase(handle)
            .map(OverlayPhase::is_shown)
            .unwrap_or(false);
        let visibility = if shown {
            "opacity: 1; pointer-events: auto;"
        } else {
            "opacity: 0; pointer-events: none;"
        };
        format!(
            "position: fixed; inset: 0; z-index: {z_index}; display: flex; \
             align-items: center; justify-content: center; \
             background-color: rgba(0, 0, 0, 0.5); \
             transition: opacity {transition_ms}ms; {visibility}"
        )
    };

    let handle_close = move |_| {
        if let Err(e) = presenter.close(handle) {
            log::warn!("Close invoice: {}", e);
        }
    };

    let handle_print = move |_| {
        if let Err(e) = presenter.print(handle) {
            log::warn!("Print invoice: {}", e);
        }
    };

    let date = format_date_fr(&entry.issued_at);
    let time = format_time_fr(&entry.issued_at);
    let content = entry.content.to_string();

    view! {
        <div id=handle.overlay_dom_id() class="invoice-overlay" style=overlay_style>
            <div
                class="invoice-dialog rounded-lg"
                style="background-color: #fff; max-width: 56rem; width: 100%; margin: 0 1rem; max-height: 90vh; overflow-y: auto; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);"
            >
                <div style="padding: 1.5rem;">
                    <div
                        class="mb-4"
                        style="display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid #e5e7eb; padding-bottom: 1rem;"
                    >
                        <div>
                            <h2 class="font-bold text-gray-800" style="font-size: 1.5rem; margin: 0;">{TITLE}</h2>
                            <p style="color: #4b5563; margin: 0;">{SUBTITLE}</p>
                        </div>
                        <div style="text-align: right;">
                            <p class="text-sm" style="color: #4b5563; margin: 0;">"Date: " {date}</p>
                            <p class="text-sm" style="color: #4b5563; margin: 0;">"Heure: " {time}</p>
                        </div>
                    </div>

                    <div id=handle.content_dom_id() inner_html=content></div>

                    <div style="display: flex; justify-content: flex-end; gap: 1rem; margin-top: 2rem; padding-top: 1rem; border-top: 1px solid #e5e7eb;">
                        <button class="button button--secondary" on:click=handle_close>
                            "Fermer"
                        </button>
                        <button class="button button--primary" on:click=handle_print>
                            "📄 Télécharger PDF"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

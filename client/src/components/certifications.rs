//! Certification cards.

use folio::content::CERTIFICATIONS;
use leptos::prelude::*;

use crate::components::card_action::CardActionButton;

#[component]
pub fn CertificationsSection() -> impl IntoView {
    view! {
        <section id="certifications" class="section-wrapper">
            <h2 class="section-title">"Certifications"</h2>
            <div class="cards-container">
                {CERTIFICATIONS
                    .iter()
                    .map(|cert| {
                        view! {
                            <div class="card">
                                <h3 class="card-title">{cert.title}</h3>
                                <p class="card-content">{cert.issuer}</p>
                                <p class="card-content">{cert.issued}</p>
                                <CardActionButton title=cert.title action=cert.action/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

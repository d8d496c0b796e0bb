//! Certificates section and lightbox

use super::action;
use super::date::format_long_date;
use super::node::{Element, Node};
use crate::content::Certificate;

pub fn certificate_card(index: usize, cert: &Certificate) -> Element {
    Element::new("div")
        .class("certificate-card")
        .attr("data-action", action::OPEN_CERTIFICATE)
        .attr("data-index", index.to_string())
        .child(
            Element::new("img")
                .class("certificate-card__image")
                .attr("src", &cert.image)
                .attr("alt", &cert.title)
                .attr("loading", "lazy"),
        )
        .child(
            Element::new("div")
                .class("certificate-card__content")
                .child(
                    Element::new("h3")
                        .class("certificate-card__title")
                        .text(&cert.title),
                )
                .child(
                    Element::new("p")
                        .class("certificate-card__issuer")
                        .text(&cert.issuer),
                )
                .child(
                    Element::new("p")
                        .class("certificate-card__date")
                        .text(format_long_date(cert.issue_date)),
                ),
        )
}

pub fn certificate_grid(certificates: &[Certificate]) -> Node {
    Element::new("div")
        .class("certificates__grid")
        .attr("id", "certificates-grid")
        .children(
            certificates
                .iter()
                .enumerate()
                .map(|(index, cert)| certificate_card(index, cert)),
        )
        .into()
}

/// Lightbox content: the certificate image and its caption block
pub fn certificate_detail(cert: &Certificate) -> Node {
    Element::new("div")
        .class("lightbox__content")
        .child(
            Element::new("img")
                .class("lightbox__image")
                .attr("id", "lightbox-image")
                .attr("src", &cert.image)
                .attr("alt", &cert.title),
        )
        .child(
            Element::new("div")
                .class("lightbox__info")
                .attr("id", "lightbox-info")
                .child(
                    Element::new("h3")
                        .attr("id", "lightbox-title")
                        .text(&cert.title),
                )
                .child(Element::new("p").text(&cert.issuer))
                .child(Element::new("p").text(format_long_date(cert.issue_date)))
                .child_opt(cert.verify_url.as_deref().map(|url| {
                    Element::new("a")
                        .class("btn")
                        .class("btn--primary")
                        .external(url)
                        .text("Verify Certificate")
                })),
        )
        .into()
}

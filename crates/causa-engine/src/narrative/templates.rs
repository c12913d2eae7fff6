//! Explanation text for causal chains.
//!
//! One link renders as `"{cause} causes {effect}"`, with `" through
//! {mechanism}"` appended when the link names one. Each further link adds
//! `" which causes {effect}"` and its own mechanism clause. The output is a
//! stable contract: downstream consumers compare it verbatim.

use causa_core::models::CausalLink;

/// Render a chain of links given in cause → effect order.
pub fn render_chain(links: &[&CausalLink]) -> String {
    let Some((first, rest)) = links.split_first() else {
        return String::new();
    };

    let mut text = format!("{} causes {}", first.cause, first.effect);
    push_mechanism(&mut text, first);
    for link in rest {
        text.push_str(" which causes ");
        text.push_str(&link.effect);
        push_mechanism(&mut text, link);
    }
    text
}

fn push_mechanism(text: &mut String, link: &CausalLink) {
    if let Some(mechanism) = link.mechanism.as_deref().filter(|m| !m.is_empty()) {
        text.push_str(" through ");
        text.push_str(mechanism);
    }
}

use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// One-way `unseen → visible` switch for entrance animations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    seen: bool,
}

impl RevealLatch {
    pub fn new(seen: bool) -> Self {
        Self { seen }
    }

    /// Record the latest visibility; returns whether the section has ever
    /// been visible.
    pub fn observe(&mut self, visible: bool) -> bool {
        self.seen |= visible;
        self.seen
    }

    pub fn is_seen(self) -> bool {
        self.seen
    }
}

/// A page section that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(
    #[prop(optional)] id: Option<&'static str>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(node_ref);
    let seen = Memo::new(move |prev: Option<&bool>| {
        RevealLatch::new(prev.copied().unwrap_or(false)).observe(visible.get())
    });

    view! {
        <section
            id=id
            node_ref=node_ref
            class=move || {
                let state = if seen.get() { "reveal reveal--visible" } else { "reveal" };
                format!("{class} {state}")
            }
        >
            {children()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unseen() {
        assert!(!RevealLatch::default().is_seen());
    }

    #[test]
    fn latches_on_first_visibility() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.observe(false));
        assert!(latch.is_seen());
    }
}

/// An anchor's `href` with the browsing context it should open in.
///
/// [`LinkView::new`] keeps `mailto:` and in-page `#fragment` links in the
/// current context. [`LinkView::external`] is for links that always leave the
/// page, whatever their shape. Links opening a new context carry
/// `noopener noreferrer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl LinkView {
    pub fn new(href: &str) -> Self {
        if href.starts_with('#') && href.len() > 1 {
            Self::current(href)
        } else {
            Self::external(href)
        }
    }

    /// Project and other outbound links: a new context unless it is `mailto:`.
    pub fn external(href: &str) -> Self {
        if href.starts_with("mailto:") {
            Self::current(href)
        } else {
            LinkView {
                href: href.to_string(),
                target: "_blank",
                rel: "noopener noreferrer",
            }
        }
    }

    fn current(href: &str) -> Self {
        LinkView {
            href: href.to_string(),
            target: "_self",
            rel: "",
        }
    }

    /// `mailto:` link for an address, no percent-encoding applied.
    pub fn mailto(email: &str) -> Self {
        Self::new(&format!("mailto:{email}"))
    }

    pub fn has_rel(&self) -> bool {
        !self.rel.is_empty()
    }
}

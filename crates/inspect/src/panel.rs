//! The seam between the inspector and the diagnostic UI hosting it.

use crate::text::escape_attribute;

/// Width given to each tab added by the inspector.
pub const FULL_WIDTH: &str = "100%";

/// A diagnostic view that shows content in separately captioned tabs.
#[cfg_attr(test, mockall::automock)]
pub trait DebugHost {
    fn add_tab(&mut self, caption: &str, html: String, width: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugTab {
    caption: String,
    html: String,
    width: String,
}

impl DebugTab {
    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn width(&self) -> &str {
        &self.width
    }
}

/// A [`DebugHost`] that collects tabs and renders them as one HTML document fragment.
#[derive(Debug, Default, Clone)]
pub struct TabbedPanel {
    tabs: Vec<DebugTab>,
}

impl TabbedPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[DebugTab] {
        &self.tabs
    }

    pub fn tab(&self, caption: &str) -> Option<&DebugTab> {
        self.tabs.iter().find(|tab| tab.caption == caption)
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"debug-tabs\">");
        for tab in &self.tabs {
            html.push_str("<section data-caption=\"");
            html.push_str(&escape_attribute(&tab.caption));
            html.push_str("\" style=\"width:");
            html.push_str(&escape_attribute(&tab.width));
            html.push_str(";\">");
            html.push_str(&tab.html);
            html.push_str("</section>");
        }
        html.push_str("</div>");
        html
    }
}

impl DebugHost for TabbedPanel {
    fn add_tab(&mut self, caption: &str, html: String, width: &str) {
        self.tabs.push(DebugTab { caption: caption.to_owned(), html, width: width.to_owned() });
    }
}

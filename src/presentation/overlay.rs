/// One entry of the fixed navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NavLink {
    pub anchor: String,
    pub label: String,
}

/// Static navigation overlay; drawn by the host UI, never frame-updated.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Overlay {
    pub brand: String,
    /// Same order as the presentation's sections.
    pub links: Vec<NavLink>,
}

impl Overlay {
    pub fn anchors(&self) -> impl Iterator<Item = &str> + '_ {
        self.links.iter().map(|l| l.anchor.as_str())
    }
}

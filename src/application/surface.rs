// Surface trait - the page the binder writes into
use crate::domain::chart::{ChartSpec, RenderConfig};
use crate::domain::error::Result;

pub trait Surface {
    /// Whether an element with this id exists on the page
    fn has_element(&self, element_id: &str) -> bool;

    /// Replace the element's inner HTML without escaping
    fn set_inner_html(&self, element_id: &str, html: &str) -> Result<()>;

    /// Render a chart into the element, updating any chart already there in place
    fn react(&self, element_id: &str, spec: &ChartSpec, config: &RenderConfig) -> Result<()>;
}

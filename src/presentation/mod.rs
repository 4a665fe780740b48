mod markup;
mod styles;
mod view;

pub use markup::{Element, Node, escape_html, unescape_html};
pub use styles::stylesheet;
pub use view::{
    ControlGroup, FormView, LOAD_FAILURE_HINT, LOAD_FAILURE_TITLE, ViewContext, build_view,
    form_dom_id, load_failure_html,
};

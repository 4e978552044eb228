//! Document setup: head tags and the loading screen

use lib_core::view::HeadTag;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Write `tags` into `<head>`.
pub fn apply_head_tags(tags: &[HeadTag]) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document available, head tags not applied");
        return;
    };
    let Some(head) = document.head() else {
        log::error!("document has no <head>");
        return;
    };

    for tag in tags {
        match build_tag(&document, tag) {
            Ok(Some(element)) => {
                if let Err(e) = head.append_child(&element) {
                    log::warn!("failed to append head tag {:?}: {:?}", tag, e);
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("failed to build head tag {:?}: {:?}", tag, e),
        }
    }
    log::debug!("{} head tags applied", tags.len());
}

/// Build the element for `tag`. The title is set on the document in place,
/// so index.html keeps its single `<title>`.
fn build_tag(
    document: &Document,
    tag: &HeadTag,
) -> Result<Option<web_sys::Element>, wasm_bindgen::JsValue> {
    let element = match tag {
        HeadTag::Title(title) => {
            document.set_title(title);
            return Ok(None);
        }
        HeadTag::MetaName { name, content } => {
            let meta = document.create_element("meta")?;
            meta.set_attribute("name", name)?;
            meta.set_attribute("content", content)?;
            meta
        }
        HeadTag::MetaProperty { property, content } => {
            let meta = document.create_element("meta")?;
            meta.set_attribute("property", property)?;
            meta.set_attribute("content", content)?;
            meta
        }
        HeadTag::Link {
            rel,
            href,
            mime,
            sizes,
        } => {
            let link = document.create_element("link")?;
            link.set_attribute("rel", rel)?;
            link.set_attribute("href", href)?;
            if let Some(mime) = mime {
                link.set_attribute("type", mime)?;
            }
            if let Some(sizes) = sizes {
                link.set_attribute("sizes", sizes)?;
            }
            link
        }
    };
    Ok(Some(element))
}

/// Hide the loading screen element shipped in index.html
pub fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(loading) = document.get_element_by_id("leptos-loading") else {
        log::warn!("loading element not found");
        return;
    };

    if let Some(html_element) = loading.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("failed to hide loading screen: {:?}", e);
        }
    }
    loading.set_attribute("style", "display: none !important;").ok();
}

use crate::constants::{CURSOR_CLASS, MENU_CLASS};
use lens_core::{AssetResolver, LinkEntry};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Handles to the elements the renderer and event wiring need.
pub struct MenuElements {
    pub main: web::Element,
    pub cursor: web::HtmlElement,
    pub images: Vec<web::HtmlElement>,
    pub items: Vec<web::Element>,
}

fn create(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append child: {:?}", e))
}

fn into_html(el: web::Element) -> anyhow::Result<web::HtmlElement> {
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("not an HtmlElement: {:?}", e))
}

/// Build `<main>` with the lens (`.cursor` holding one image per link) and
/// the link list (`.menu > nav > ul > li > a > span`) inside `root`.
pub fn build_menu(
    document: &web::Document,
    root: &web::Element,
    links: &[LinkEntry],
    assets: &AssetResolver,
) -> anyhow::Result<MenuElements> {
    let main = create(document, "main")?;

    let cursor = create(document, "div")?;
    cursor.set_class_name(CURSOR_CLASS);
    let mut images = Vec::with_capacity(links.len());
    for link in links {
        let img = create(document, "img")?;
        _ = img.set_attribute("src", &assets.resolve(&link.image_ref));
        _ = img.set_attribute("alt", "");
        append(&cursor, &img)?;
        images.push(into_html(img)?);
    }
    append(&main, &cursor)?;

    let menu = create(document, "div")?;
    menu.set_class_name(MENU_CLASS);
    let nav = create(document, "nav")?;
    let list = create(document, "ul")?;
    let mut items = Vec::with_capacity(links.len());
    for link in links {
        let li = create(document, "li")?;
        let a = create(document, "a")?;
        _ = a.set_attribute("href", "#");
        let span = create(document, "span")?;
        span.set_text_content(Some(&link.label));
        append(&a, &span)?;
        append(&li, &a)?;
        append(&list, &li)?;
        items.push(li);
    }
    append(&nav, &list)?;
    append(&menu, &nav)?;
    append(&main, &menu)?;

    append(root, &main)?;
    Ok(MenuElements {
        main,
        cursor: into_html(cursor)?,
        images,
        items,
    })
}

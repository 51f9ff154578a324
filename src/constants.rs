// DOM names shared by markup construction, event wiring and rendering.

// Element the menu is built into when auto-mounting
pub const ROOT_ELEMENT_ID: &str = "lens-menu";

// Markup classes (styled by the host page)
pub const CURSOR_CLASS: &str = "cursor";
pub const MENU_CLASS: &str = "menu";
pub const ACTIVE_CLASS: &str = "isActive";

// Root element attributes read into `WebConfig`
pub const ASSET_BASE_ATTR: &str = "data-asset-base";
pub const SMOOTHING_ATTR: &str = "data-smoothing";

// Browser events
pub const EVENT_POINTER_MOVE: &str = "pointermove";
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_LINK_ENTER: &str = "pointerenter";
pub const EVENT_LINK_LEAVE: &str = "pointerleave";

// CSS property written every frame
pub const TRANSFORM_PROPERTY: &str = "transform";

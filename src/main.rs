//! Folio entry point
//!
//! Browser: wires DOM events into the interaction controller and applies the
//! effects it returns. Native: prints the static page to stdout.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
        IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use folio::render::Node;
    use folio::render::page::{self, slot};
    use folio::ui::{Effect, Section, SectionBounds, UiEvent};
    use folio::{ContentStore, Controller, Settings};

    /// Page instance holding all state
    struct App {
        controller: Controller,
        document: Document,
        /// Fires `SkillVisible` once per rendered bar
        observer: Option<IntersectionObserver>,
    }

    type SharedApp = Rc<RefCell<App>>;

    fn dispatch(app: &SharedApp, event: UiEvent) {
        // Release the borrow before touching the DOM; effects may dispatch again
        let effects = app.borrow_mut().controller.dispatch(event);
        for effect in effects {
            apply(app, effect);
        }
    }

    fn apply(app: &SharedApp, effect: Effect) {
        let document = app.borrow().document.clone();

        match effect {
            Effect::RenderSection(Section::Skills) => {
                let view = app.borrow().controller.skills_view();
                set_html(&document, slot::SKILLS, &view);
                observe_skill_bars(app);
            }
            Effect::RenderSection(Section::Projects) => {
                let view = app.borrow().controller.projects_view();
                set_html(&document, slot::PROJECTS, &view);
            }
            Effect::ShowProjectDetail(index) => {
                let view = app.borrow().controller.project_detail_view(index);
                if let Some(view) = view {
                    set_html(&document, slot::PROJECT_DETAIL, &view);
                }
                set_open(&document, slot::PROJECT_MODAL, true);
            }
            Effect::HideProjectDetail => set_open(&document, slot::PROJECT_MODAL, false),
            Effect::ShowCertificateDetail(index) => {
                let view = app.borrow().controller.certificate_detail_view(index);
                if let Some(view) = view {
                    set_html(&document, slot::CERTIFICATE_DETAIL, &view);
                }
                set_open(&document, slot::CERTIFICATE_LIGHTBOX, true);
            }
            Effect::HideCertificateDetail => set_open(&document, slot::CERTIFICATE_LIGHTBOX, false),
            Effect::LockScroll => set_body_overflow(&document, "hidden"),
            Effect::UnlockScroll => set_body_overflow(&document, ""),
            Effect::FillSkillBar { position, level } => {
                let selector = format!(r#".skill__bar[data-index="{}"] .skill__fill"#, position);
                if let Some(fill) = query::<HtmlElement>(&document, &selector) {
                    let _ = fill.style().set_property("width", &format!("{}%", level));
                }
            }
            Effect::ShowFieldError { field, message } => {
                set_text(&document, &page::error_id(field), &message);
                toggle_class(&document, field, "error", true);
            }
            Effect::ClearFieldError { field } => {
                set_text(&document, &page::error_id(field), "");
                toggle_class(&document, field, "error", false);
            }
            Effect::ShowSuccess {
                token,
                message,
                dismiss_after_ms,
            } => {
                set_text(&document, slot::FORM_SUCCESS, &message);
                toggle_class(&document, slot::FORM_SUCCESS, "show", true);
                let app = app.clone();
                set_timeout(dismiss_after_ms, move || {
                    dispatch(&app, UiEvent::SuccessExpired(token))
                });
            }
            Effect::HideSuccess => toggle_class(&document, slot::FORM_SUCCESS, "show", false),
            Effect::ClearForm => {
                if let Some(form) = by_id::<HtmlFormElement>(&document, slot::CONTACT_FORM) {
                    form.reset();
                }
            }
            Effect::SetNavMenu(open) => {
                toggle_class(&document, slot::NAV_MENU, "active", open);
                toggle_class(&document, slot::NAV_TOGGLE, "active", open);
            }
            Effect::SetHeaderScrolled(scrolled) => {
                toggle_class(&document, slot::HEADER, "scrolled", scrolled)
            }
            Effect::SetActiveSection(id) => {
                let href = id.map(|id| format!("#{}", id));
                for link in query_all(&document, ".nav__link") {
                    let active = href.is_some() && link.get_attribute("href") == href;
                    let _ = link.class_list().toggle_with_force("active", active);
                }
            }
        }
    }

    // === DOM helpers ===

    fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
        document.get_element_by_id(id)?.dyn_into::<T>().ok()
    }

    fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
        document
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into::<T>()
            .ok()
    }

    fn query_all(document: &Document, selector: &str) -> Vec<Element> {
        let Ok(list) = document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn set_html(document: &Document, id: &str, node: &Node) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_inner_html(&node.to_html());
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn toggle_class(document: &Document, id: &str, class: &str, on: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force(class, on);
        }
    }

    fn set_open(document: &Document, id: &str, open: bool) {
        toggle_class(document, id, "active", open);
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("aria-hidden", if open { "false" } else { "true" });
        }
    }

    fn set_body_overflow(document: &Document, value: &str) {
        if let Some(body) = document.body() {
            let _ = body.style().set_property("overflow", value);
        }
    }

    fn set_timeout(ms: u32, f: impl FnOnce() + 'static) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(f);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms as i32,
        );
        closure.forget();
    }

    fn section_bounds(document: &Document) -> Vec<SectionBounds> {
        query_all(document, ".section")
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| SectionBounds {
                id: el.id(),
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
            .collect()
    }

    /// Name and value of the form control an event came from
    fn field_value(event: &web_sys::Event) -> Option<(String, String)> {
        let target = event.target()?;
        if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
            return Some((input.name(), input.value()));
        }
        let area = target.dyn_ref::<HtmlTextAreaElement>()?;
        Some((area.name(), area.value()))
    }

    // === Setup ===

    fn skill_observer(app: &SharedApp, threshold: f64) -> Option<IntersectionObserver> {
        let handler = app.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    let position = target
                        .get_attribute("data-index")
                        .and_then(|i| i.parse::<usize>().ok());
                    if let Some(position) = position {
                        dispatch(&handler, UiEvent::SkillVisible(position));
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init);
        callback.forget();

        match observer {
            Ok(observer) => Some(observer),
            Err(e) => {
                log::warn!("Skill bars will not animate: {:?}", e);
                None
            }
        }
    }

    /// Watch the currently rendered bars; earlier targets are dropped
    fn observe_skill_bars(app: &SharedApp) {
        let app = app.borrow();
        let Some(observer) = &app.observer else {
            return;
        };
        observer.disconnect();
        for bar in query_all(&app.document, ".skill__bar") {
            observer.observe(&bar);
        }
    }

    fn setup_click_delegation(app: &SharedApp) {
        let handler = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            // A link inside a card resolves to its own action and never opens the card
            let Ok(Some(el)) = target.closest("[data-action]") else {
                return;
            };
            let Some(name) = el.get_attribute("data-action") else {
                return;
            };
            if let Some(ui_event) = UiEvent::from_action(&name, |attr| el.get_attribute(attr)) {
                dispatch(&handler, ui_event);
            }
        });
        let document = app.borrow().document.clone();
        let _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(app: &SharedApp) {
        let handler = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if let Some(ui_event) = UiEvent::from_key(&event.key()) {
                dispatch(&handler, ui_event);
            }
        });
        let document = app.borrow().document.clone();
        let _ =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_contact_form(app: &SharedApp) {
        let document = app.borrow().document.clone();
        let Some(form) = document.get_element_by_id(slot::CONTACT_FORM) else {
            log::warn!("No contact form on this page");
            return;
        };

        // Submit (never leaves the page)
        {
            let handler = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                dispatch(&handler, UiEvent::Submit);
            });
            let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Typing clears a shown error
        {
            let handler = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                if let Some((field, value)) = field_value(&event) {
                    dispatch(&handler, UiEvent::FieldInput { field, value });
                }
            });
            let _ = form.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Blur does not bubble; focusout does
        {
            let handler = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                if let Some((field, _)) = field_value(&event) {
                    dispatch(&handler, UiEvent::FieldBlur { field });
                }
            });
            let _ =
                form.add_event_listener_with_callback("focusout", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_scroll(app: &SharedApp) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let handler = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            sync_scroll(&handler);
        });
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();

        // Highlight the starting section before any scroll happens
        sync_scroll(app);
    }

    /// Feed the current scroll position and section geometry to the controller
    fn sync_scroll(app: &SharedApp) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let y = window.scroll_y().unwrap_or(0.0);
        let sections = section_bounds(&app.borrow().document);
        dispatch(app, UiEvent::Scrolled { y, sections });
    }

    /// Hero terminal: one character per timer tick, forever
    fn type_next(app: SharedApp) {
        let frame = app.borrow_mut().controller.typing_step();
        set_text(&app.borrow().document, slot::TYPING, &frame.text);
        set_timeout(frame.next_delay_ms, move || type_next(app));
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Folio starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let content = match ContentStore::bundled() {
            Ok(content) => content,
            Err(e) => {
                log::error!("Failed to load content: {}", e);
                return;
            }
        };
        let settings = Settings::load();
        let threshold = settings.reveal_threshold;

        let year = js_sys::Date::new_0().get_full_year() as i32;

        // Pre-rendered pages have no mount point
        if let Some(root) = document.get_element_by_id("app") {
            root.set_inner_html(&page::body(&content, year).to_html());
        }
        // A pre-rendered footer carries the year it was generated
        set_text(&document, slot::CURRENT_YEAR, &year.to_string());

        let app = Rc::new(RefCell::new(App {
            controller: Controller::new(content, settings),
            document,
            observer: None,
        }));

        let observer = skill_observer(&app, threshold);
        app.borrow_mut().observer = observer;
        observe_skill_bars(&app);

        setup_click_delegation(&app);
        setup_keyboard(&app);
        setup_contact_form(&app);
        setup_scroll(&app);

        type_next(app);

        log::info!("Folio running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use chrono::Datelike;
    use folio::{ContentStore, Settings};

    env_logger::init();

    // Optional content directory; the bundled sample otherwise
    let content = match std::env::args().nth(1) {
        Some(dir) => {
            log::info!("Rendering content from {}", dir);
            ContentStore::from_dir(std::path::Path::new(&dir))
        }
        None => ContentStore::bundled(),
    };

    let content = match content {
        Ok(content) => content,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("folio: {}", e);
            std::process::exit(1);
        }
    };

    let settings = Settings::load();
    let year = chrono::Local::now().year();
    print!("{}", folio::render::page::document(&content, &settings, year));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

//! Scroll-triggered fade-in.
//!
//! Sections register their root element; once an element intersects the
//! viewport by at least the configured ratio it gets the visible class and
//! keeps it for the rest of the page's life. The browser observer is
//! disconnected when the owning scope is cleaned up or the handle dropped.

use crate::config::LandingConfig;
use crate::error::{LandingError, Result};
use crate::state::VisibleSet;
use js_sys::Array;
use leptos::html;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type Tracked = Rc<RefCell<VisibleSet<Element>>>;

/// Owns one browser `IntersectionObserver` and the set of elements it has
/// been asked to watch.
pub struct FadeInObserver {
    observer: IntersectionObserver,
    tracked: Tracked,
    threshold: f64,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl FadeInObserver {
    pub fn new(threshold: f64, visible_class: &'static str) -> Result<Self> {
        let tracked: Tracked = Rc::new(RefCell::new(VisibleSet::new()));

        let callback = {
            let tracked = Rc::clone(&tracked);
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if tracked.borrow_mut().mark_visible(&target) {
                        reveal(&target, visible_class);
                        // Visibility never reverts, so this element needs no more callbacks.
                        observer.unobserve(&target);
                        log::debug!("fade-in: <{}> became visible", target.tag_name().to_lowercase());
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(LandingError::observer)?;

        log::debug!("fade-in: observer created (threshold {threshold})");
        Ok(Self {
            observer,
            tracked,
            threshold,
            _callback: callback,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start watching `element`. Returns `false` when it is already watched
    /// or the observer has been disconnected.
    pub fn register(&self, element: &Element) -> bool {
        if !self.tracked.borrow_mut().register(element.clone()) {
            return false;
        }
        self.observer.observe(element);
        log::trace!("fade-in: watching <{}>", element.tag_name().to_lowercase());
        true
    }

    pub fn is_visible(&self, element: &Element) -> bool {
        self.tracked.borrow().is_visible(element)
    }

    pub fn watched(&self) -> usize {
        self.tracked.borrow().len()
    }

    pub fn is_disconnected(&self) -> bool {
        self.tracked.borrow().is_released()
    }

    /// Stop all observation. Calling it again does nothing.
    pub fn disconnect(&self) {
        let mut tracked = self.tracked.borrow_mut();
        if tracked.is_released() {
            return;
        }
        tracked.release();
        self.observer.disconnect();
        log::debug!(
            "fade-in: observer released ({} of {} sections seen)",
            tracked.visible_count(),
            tracked.len()
        );
    }
}

impl Drop for FadeInObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

fn reveal(element: &Element, class: &str) {
    if let Err(err) = element.class_list().add_1(class) {
        log::warn!("fade-in: could not add {class}: {err:?}");
    }
}

/// Reactive-scope handle to the page's observer, shared through context.
///
/// When the observer could not be created every registered element is
/// revealed straight away so no content stays hidden.
#[derive(Clone, Copy)]
pub struct FadeIn {
    observer: StoredValue<Option<FadeInObserver>, LocalStorage>,
    visible_class: &'static str,
}

impl FadeIn {
    /// Create the observer for the current scope, provide it as context and
    /// release it when the scope is cleaned up.
    pub fn install(config: &LandingConfig) -> Self {
        let observer = match FadeInObserver::new(config.fade_threshold, config.visible_class) {
            Ok(observer) => Some(observer),
            Err(err) => {
                log::warn!("{err}; sections will be shown without animation");
                None
            }
        };

        let handle = Self {
            observer: StoredValue::new_local(observer),
            visible_class: config.visible_class,
        };
        provide_context(handle);
        on_cleanup(move || handle.release());
        handle
    }

    pub fn register(&self, element: &Element) {
        let registered = self
            .observer
            .try_with_value(|observer| observer.as_ref().map(|o| o.register(element)));
        match registered {
            Some(Some(true)) => {}
            Some(Some(false)) => log::trace!("fade-in: element already registered"),
            _ => reveal(element, self.visible_class),
        }
    }

    pub fn release(&self) {
        self.observer.try_with_value(|observer| {
            if let Some(observer) = observer {
                observer.disconnect();
            }
        });
    }
}

/// Node ref for a fade-in block. The element is registered with the page's
/// [`FadeIn`] as soon as it is mounted.
pub fn use_fade_in() -> NodeRef<html::Div> {
    let node_ref = NodeRef::<html::Div>::new();
    let fade = use_context::<FadeIn>();
    if fade.is_none() {
        log::warn!("fade-in block rendered outside a FadeIn scope");
    }

    Effect::new(move |_| {
        if let Some(div) = node_ref.get() {
            let element: Element = div.into();
            match fade {
                Some(fade) => fade.register(&element),
                None => reveal(&element, crate::config::VISIBLE_CLASS),
            }
        }
    });

    node_ref
}

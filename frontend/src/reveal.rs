use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Share of the element that has to be on screen before it counts as seen.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
}

impl RevealOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { DEFAULT_THRESHOLD } else { threshold.clamp(0.0, 1.0) };
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Pending,
    Revealed,
}

/// What the host reported about one observed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    fn reaches(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

/// Something that stops delivering intersection events once detached.
pub trait Detach {
    fn detach(&mut self);
}

/// Owns a live observation. Cancelling is idempotent: the target is
/// detached on the first call only, and dropping an active subscription
/// cancels it.
pub struct Subscription<D: Detach> {
    target: Option<D>,
}

impl<D: Detach> Subscription<D> {
    pub fn new(target: D) -> Self {
        Self { target: Some(target) }
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Returns whether this call did the detaching.
    pub fn cancel(&mut self) -> bool {
        match self.target.take() {
            Some(mut target) => {
                target.detach();
                true
            }
            None => false,
        }
    }
}

impl<D: Detach> Drop for Subscription<D> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// One-shot reveal: flips to `Revealed` on the first sample at or above the
/// threshold and detaches right away. Later samples, and samples after a
/// `cancel`, are ignored.
pub struct RevealWatch<D: Detach> {
    subscription: Subscription<D>,
    visibility: Visibility,
    options: RevealOptions,
}

impl<D: Detach> RevealWatch<D> {
    pub fn new(target: D, options: RevealOptions) -> Self {
        Self {
            subscription: Subscription::new(target),
            visibility: Visibility::Pending,
            options,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Feeds one host event. Returns true exactly once, on the transition
    /// to `Revealed`.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if !self.subscription.is_active() || !sample.reaches(self.options.threshold) {
            return false;
        }
        self.visibility = Visibility::Revealed;
        self.subscription.cancel();
        true
    }

    /// Teardown path. Safe to call after a reveal or more than once.
    pub fn cancel(&mut self) {
        self.subscription.cancel();
    }
}

/// A DOM element registered with an `IntersectionObserver`.
pub struct DomObservation {
    observer: IntersectionObserver,
    target: Element,
}

impl Detach for DomObservation {
    fn detach(&mut self) {
        self.observer.unobserve(&self.target);
        // Drop records queued for the next notify task so the callback
        // isn't invoked after the effect cleanup releases it.
        let _ = self.observer.take_records();
        self.observer.disconnect();
    }
}

type RevealSlot<D> = Rc<RefCell<Option<RevealWatch<D>>>>;

/// Feeds a batch of host samples into the watch held in `slot` and
/// publishes the watch's visibility when the batch revealed it. An empty
/// slot (torn down) swallows the batch.
pub fn deliver<D: Detach>(
    slot: &RefCell<Option<RevealWatch<D>>>,
    samples: impl IntoIterator<Item = IntersectionSample>,
    publish: &Callback<Visibility>,
) {
    let revealed = {
        let mut slot = slot.borrow_mut();
        let Some(watch) = slot.as_mut() else {
            return;
        };
        if samples.into_iter().any(|sample| watch.observe(sample)) {
            Some(watch.visibility())
        } else {
            None
        }
    };
    if let Some(visibility) = revealed {
        publish.emit(visibility);
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn start_observing(
    element: Element,
    options: RevealOptions,
    slot: RevealSlot<DomObservation>,
    publish: Callback<Visibility>,
) -> Result<ObserverCallback, JsValue> {
    let events = slot.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        let samples = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| IntersectionSample {
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            });
        deliver(&*events, samples, &publish);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold()));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(&element);
    *slot.borrow_mut() = Some(RevealWatch::new(DomObservation { observer, target: element }, options));

    Ok(callback)
}

/// Attach the returned ref to an element; the visibility turns `Revealed`
/// the first time that element scrolls into view and stays there.
#[hook]
pub fn use_reveal(options: RevealOptions) -> (NodeRef, Visibility) {
    let node = use_node_ref();
    let visibility = use_state(|| Visibility::Pending);

    {
        let node = node.clone();
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |options| {
                let slot: RevealSlot<DomObservation> = Rc::new(RefCell::new(None));
                let publish = Callback::from(move |next: Visibility| {
                    debug!("Element entered the viewport");
                    visibility.set(next);
                });

                let callback = match node.cast::<Element>() {
                    Some(element) => match start_observing(element, *options, slot.clone(), publish) {
                        Ok(callback) => Some(callback),
                        Err(err) => {
                            warn!("Could not observe element for reveal: {:?}", err);
                            None
                        }
                    },
                    None => {
                        debug!("Reveal target not mounted, nothing to observe");
                        None
                    }
                };

                move || {
                    if let Some(mut watch) = slot.borrow_mut().take() {
                        watch.cancel();
                    }
                    drop(callback);
                }
            },
            options,
        );
    }

    (node, *visibility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Default)]
    struct FakeTarget {
        detaches: Rc<Cell<u32>>,
    }

    impl Detach for FakeTarget {
        fn detach(&mut self) {
            self.detaches.set(self.detaches.get() + 1);
        }
    }

    fn visible(ratio: f64) -> IntersectionSample {
        IntersectionSample { is_intersecting: true, ratio }
    }

    fn hidden() -> IntersectionSample {
        IntersectionSample { is_intersecting: false, ratio: 0.0 }
    }

    fn watch() -> (RevealWatch<FakeTarget>, Rc<Cell<u32>>) {
        let target = FakeTarget::default();
        let detaches = target.detaches.clone();
        (RevealWatch::new(target, RevealOptions::default()), detaches)
    }

    #[test]
    fn starts_pending_and_observing() {
        let (watch, detaches) = watch();
        assert_eq!(watch.visibility(), Visibility::Pending);
        assert_eq!(detaches.get(), 0);
    }

    #[test]
    fn below_threshold_keeps_waiting() {
        let (mut watch, detaches) = watch();
        assert!(!watch.observe(visible(0.05)));
        assert!(!watch.observe(hidden()));
        // Ratio is meaningless when the host says the element isn't intersecting.
        assert!(!watch.observe(IntersectionSample { is_intersecting: false, ratio: 0.5 }));
        assert_eq!(watch.visibility(), Visibility::Pending);
        assert_eq!(detaches.get(), 0);
    }

    #[test]
    fn reveals_once_and_detaches_once() {
        let (mut watch, detaches) = watch();
        assert!(watch.observe(visible(0.1)));
        assert_eq!(watch.visibility(), Visibility::Revealed);
        assert_eq!(detaches.get(), 1);

        assert!(!watch.observe(visible(1.0)));
        watch.cancel();
        drop(watch);
        assert_eq!(detaches.get(), 1);
    }

    #[test]
    fn stays_revealed_after_leaving_viewport() {
        let (mut watch, _) = watch();
        watch.observe(visible(0.6));
        assert!(!watch.observe(hidden()));
        assert_eq!(watch.visibility(), Visibility::Revealed);
    }

    #[test]
    fn cancel_before_reveal_silences_later_events() {
        let (mut watch, detaches) = watch();
        watch.cancel();
        assert_eq!(detaches.get(), 1);

        let mut fired = 0;
        if watch.observe(visible(1.0)) {
            fired += 1;
        }
        assert_eq!(fired, 0);
        assert_eq!(watch.visibility(), Visibility::Pending);
        assert_eq!(detaches.get(), 1);
    }

    #[test]
    fn dropping_an_active_watch_detaches() {
        let (watch, detaches) = watch();
        drop(watch);
        assert_eq!(detaches.get(), 1);
    }

    #[test]
    fn subscription_cancel_is_idempotent() {
        let target = FakeTarget::default();
        let detaches = target.detaches.clone();
        let mut subscription = Subscription::new(target);
        assert!(subscription.cancel());
        assert!(!subscription.cancel());
        assert!(!subscription.is_active());
        drop(subscription);
        assert_eq!(detaches.get(), 1);
    }

    fn recorder() -> (Callback<Visibility>, Rc<RefCell<Vec<Visibility>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (Callback::from(move |v: Visibility| sink.borrow_mut().push(v)), seen)
    }

    #[test]
    fn deliver_publishes_reveal_once() {
        let (watch, detaches) = watch();
        let slot = RefCell::new(Some(watch));
        let (publish, seen) = recorder();

        deliver(&slot, [hidden(), visible(0.05)], &publish);
        assert!(seen.borrow().is_empty());

        deliver(&slot, [visible(0.2), visible(0.9)], &publish);
        deliver(&slot, [hidden()], &publish);
        deliver(&slot, [visible(1.0)], &publish);
        assert_eq!(*seen.borrow(), vec![Visibility::Revealed]);
        assert_eq!(detaches.get(), 1);
    }

    #[test]
    fn deliver_after_teardown_is_silent() {
        let (watch, detaches) = watch();
        let slot = RefCell::new(Some(watch));
        let (publish, seen) = recorder();

        if let Some(mut watch) = slot.borrow_mut().take() {
            watch.cancel();
        }
        deliver(&slot, [visible(1.0)], &publish);
        assert!(seen.borrow().is_empty());
        assert_eq!(detaches.get(), 1);
    }

    #[test]
    fn custom_threshold() {
        let target = FakeTarget::default();
        let mut watch = RevealWatch::new(target, RevealOptions::with_threshold(0.5));
        assert!(!watch.observe(visible(0.3)));
        assert!(watch.observe(visible(0.5)));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealOptions::with_threshold(2.0).threshold(), 1.0);
        assert_eq!(RevealOptions::with_threshold(-1.0).threshold(), 0.0);
        assert_eq!(RevealOptions::with_threshold(f64::NAN).threshold(), DEFAULT_THRESHOLD);
        assert_eq!(RevealOptions::default().threshold(), DEFAULT_THRESHOLD);
    }
}

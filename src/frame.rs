use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// On-demand `requestAnimationFrame` loop.
///
/// `on_frame(dt_sec)` returns whether it wants another frame. The loop only
/// runs between `start()` and either `on_frame` returning `false` or
/// `stop()`; dropping the loop stops it synchronously.
pub struct AnimationLoop {
    handle: Rc<Cell<Option<i32>>>,
    last_instant: Rc<Cell<Instant>>,
    tick: Tick,
}

impl AnimationLoop {
    pub fn new(mut on_frame: impl FnMut(f32) -> bool + 'static) -> Self {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let last_instant = Rc::new(Cell::new(Instant::now()));
        let tick: Tick = Rc::new(RefCell::new(None));

        let handle_tick = handle.clone();
        let last_tick = last_instant.clone();
        // Weak: the closure lives inside `tick` and must not keep it alive.
        let tick_weak: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            let now = Instant::now();
            let dt_sec = (now - last_tick.get()).as_secs_f32();
            last_tick.set(now);
            if on_frame(dt_sec) {
                if let Some(tick) = tick_weak.upgrade() {
                    request_frame(&tick, &handle_tick);
                }
            }
        }) as Box<dyn FnMut()>));

        Self {
            handle,
            last_instant,
            tick,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }

    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        self.last_instant.set(Instant::now());
        request_frame(&self.tick, &self.handle);
    }

    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Tick, handle: &Rc<Cell<Option<i32>>>) {
    let Some(w) = web::window() else {
        return;
    };
    let tick = tick.borrow();
    let Some(closure) = tick.as_ref() else {
        return;
    };
    match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => handle.set(Some(id)),
        Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
    }
}

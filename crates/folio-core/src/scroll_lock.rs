//! Page scroll lock held while any modal is open.
//!
//! One [`ScrollLock`] exists per page and is shared by every viewer on it.
//! Each viewer takes a [`ScrollHold`] from it; the page stays locked while at
//! least one hold is acquired. The first acquire saves the host's overflow
//! value and the last release restores it.

use std::cell::RefCell;
use std::rc::Rc;

/// Whatever owns the page's overflow style (the `<body>` on the web).
pub trait ScrollHost {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

struct PageLock<H> {
    host: H,
    holders: usize,
    saved: Option<String>,
}

/// Ref-counted page lock. Cloning shares the same count.
pub struct ScrollLock<H: ScrollHost> {
    page: Rc<RefCell<PageLock<H>>>,
}

impl<H: ScrollHost> Clone for ScrollLock<H> {
    fn clone(&self) -> Self {
        Self {
            page: Rc::clone(&self.page),
        }
    }
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn new(host: H) -> Self {
        Self {
            page: Rc::new(RefCell::new(PageLock {
                host,
                holders: 0,
                saved: None,
            })),
        }
    }

    /// Number of holds currently acquired.
    #[inline]
    pub fn holders(&self) -> usize {
        self.page.borrow().holders
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// A released hold on this lock, for one viewer.
    pub fn hold(&self) -> ScrollHold<H> {
        ScrollHold {
            lock: self.clone(),
            held: false,
        }
    }

    fn lock(&self) {
        let mut page = self.page.borrow_mut();
        if page.holders == 0 {
            let previous = page.host.overflow();
            page.host.set_overflow("hidden");
            page.saved = Some(previous);
            log::trace!("[scroll] locked");
        }
        page.holders += 1;
    }

    fn unlock(&self) {
        let mut page = self.page.borrow_mut();
        page.holders = page.holders.saturating_sub(1);
        if page.holders == 0 {
            if let Some(previous) = page.saved.take() {
                page.host.set_overflow(&previous);
                log::trace!("[scroll] unlocked");
            }
        }
    }
}

/// One viewer's claim on the page lock. Acquiring twice or releasing twice
/// is a no-op, and an acquired hold is released when dropped.
pub struct ScrollHold<H: ScrollHost> {
    lock: ScrollLock<H>,
    held: bool,
}

impl<H: ScrollHost> ScrollHold<H> {
    #[inline]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Returns `false` if this hold was already acquired.
    pub fn acquire(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        self.lock.lock();
        true
    }

    /// Returns `false` if this hold was not acquired.
    pub fn release(&mut self) -> bool {
        if !self.held {
            return false;
        }
        self.held = false;
        self.lock.unlock();
        true
    }
}

impl<H: ScrollHost> Drop for ScrollHold<H> {
    fn drop(&mut self) {
        self.release();
    }
}

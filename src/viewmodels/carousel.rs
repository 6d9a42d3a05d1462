use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex, task::JoinHandle, time};

use crate::models::Slide;

pub const DEFAULT_AUTOPLAY: Duration = Duration::from_millis(7000);

/// Rotating banner over the active slides, kept in API order.
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    slides: Vec<Slide>,
    index: usize,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>) -> Self {
        let mut carousel = Self::default();
        carousel.set_slides(slides);
        carousel
    }

    /// Replaces the slide set; an index that fell off the end goes back to the first slide.
    pub fn set_slides(&mut self, slides: Vec<Slide>) {
        self.slides = slides.into_iter().filter(|slide| slide.is_active).collect();
        if self.index >= self.slides.len() {
            self.index = 0;
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    /// Arrows and dots are only shown with more than one slide.
    pub fn shows_controls(&self) -> bool {
        self.slides.len() > 1
    }

    pub fn autoplays(&self) -> bool {
        self.slides.len() > 1
    }

    pub fn next(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.slides.len();
    }

    pub fn prev(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.index = (self.index + self.slides.len() - 1) % self.slides.len();
    }

    pub fn jump(&mut self, index: usize) {
        if index < self.slides.len() {
            self.index = index;
        }
    }

    /// One automatic advance. Returns false when autoplay is off.
    pub fn tick(&mut self) -> bool {
        if !self.autoplays() {
            return false;
        }
        self.next();
        true
    }
}

/// Running autoplay timer. Dropping it stops the timer.
pub struct CarouselTimer {
    handle: JoinHandle<()>,
}

impl Drop for CarouselTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Advances the carousel every `period`. Manual navigation does not reset the period.
pub fn start_autoplay(carousel: Arc<Mutex<Carousel>>, period: Duration) -> CarouselTimer {
    let handle = tokio::spawn(async move {
        let mut interval = time::interval_at(time::Instant::now() + period, period);
        loop {
            interval.tick().await;
            carousel.lock().await.tick();
        }
    });

    CarouselTimer { handle }
}

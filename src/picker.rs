use crate::{color::Rgba, colorwheel::ColorWheel, geometry::Point};

/// Handle returned by [`ColorPicker::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(Rgba)>;

/// A wheel plus the colour the user last committed.
///
/// Listeners run synchronously, in subscription order, after every commit.
pub struct ColorPicker {
    wheel: ColorWheel,
    color: Rgba,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    touch: Option<Point>,
}

impl ColorPicker {
    #[must_use]
    pub fn new(wheel: ColorWheel) -> Self {
        Self {
            wheel,
            color: Rgba::WHITE,
            listeners: vec![],
            next_listener: 0,
            touch: None,
        }
    }

    #[must_use]
    pub const fn wheel(&self) -> &ColorWheel {
        &self.wheel
    }

    pub fn wheel_mut(&mut self) -> &mut ColorWheel {
        &mut self.wheel
    }

    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// Last point of the gesture in progress, if any.
    #[must_use]
    pub const fn touch(&self) -> Option<Point> {
        self.touch
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Rgba) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    pub fn touch_down(&mut self, point: Point) {
        self.touch = Some(point);
    }

    pub fn touch_move(&mut self, point: Point) {
        if self.touch.is_some() {
            self.touch = Some(point);
        }
    }

    /// Ends the gesture and commits the colour under `point`.
    ///
    /// Outside the wheel nothing changes and `None` is returned.
    pub fn touch_up(&mut self, point: Point) -> Option<Rgba> {
        self.touch = None;
        let color = self.wheel.select(point, self.color.a)?;
        self.set_color(color);
        Some(color)
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
        log::info!("selected colour {} alpha {}", color.to_hex(), color.a);
        for (_, listener) in &mut self.listeners {
            listener(color);
        }
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        let color = Rgba::from_rgb(self.color.rgb(), alpha.clamp(0.0, 1.0));
        self.set_color(color);
    }
}

impl std::fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPicker")
            .field("wheel", &self.wheel)
            .field("color", &self.color)
            .field("listeners", &self.listeners.len())
            .field("touch", &self.touch)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::config::WheelConfig;

    fn picker() -> ColorPicker {
        ColorPicker::new(ColorWheel::new(WheelConfig::default()).unwrap())
    }

    #[test]
    fn release_inside_commits_and_notifies() {
        let mut picker = picker();
        let seen = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&seen);
        picker.subscribe(move |color| sink.borrow_mut().push(color));

        picker.touch_down(Point::new(150.0, 100.0));
        let color = picker.touch_up(Point::new(150.0, 100.0));

        assert_eq!(color, Some(Rgba::new(1.0, 0.5, 0.5, 1.0)));
        assert_eq!(picker.color(), Rgba::new(1.0, 0.5, 0.5, 1.0));
        assert_eq!(*seen.borrow(), vec![Rgba::new(1.0, 0.5, 0.5, 1.0)]);
        assert_eq!(picker.touch(), None);
    }

    #[test]
    fn release_outside_keeps_previous_colour() {
        let mut picker = picker();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        picker.subscribe(move |_| *counter.borrow_mut() += 1);

        picker.set_color(Rgba::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(picker.touch_up(Point::new(300.0, 100.0)), None);
        assert_eq!(picker.color(), Rgba::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn selection_keeps_alpha() {
        let mut picker = picker();
        picker.set_alpha(0.5);
        let color = picker.touch_up(Point::new(100.0, 100.0)).unwrap();
        assert_eq!(color.a, 0.5);
    }

    #[test]
    fn listeners_run_in_order_and_unsubscribe() {
        let mut picker = picker();
        let order = Rc::new(RefCell::new(vec![]));
        let first = Rc::clone(&order);
        let second = Rc::clone(&order);
        let a = picker.subscribe(move |_| first.borrow_mut().push("a"));
        picker.subscribe(move |_| second.borrow_mut().push("b"));

        picker.set_color(Rgba::WHITE);
        assert!(picker.unsubscribe(a));
        assert!(!picker.unsubscribe(a));
        picker.set_color(Rgba::WHITE);

        assert_eq!(*order.borrow(), vec!["a", "b", "b"]);
    }

    #[test]
    fn move_without_down_is_ignored() {
        let mut picker = picker();
        picker.touch_move(Point::new(1.0, 1.0));
        assert_eq!(picker.touch(), None);
        picker.touch_down(Point::new(1.0, 1.0));
        picker.touch_move(Point::new(2.0, 2.0));
        assert_eq!(picker.touch(), Some(Point::new(2.0, 2.0)));
    }
}

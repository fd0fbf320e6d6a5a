use egui::{Context, Event, LayerId, Order, PointerButton, Pos2, Rect, TouchId, TouchPhase};

/// Which device produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch(u64),
}

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Position relative to the canvas origin
    pub position: Pos2,
    pub source: PointerSource,
}

impl InputLocation {
    /// Converts a window-space position into canvas-local coordinates
    pub fn from_client(client: Pos2, canvas_rect: Rect, source: PointerSource) -> Self {
        Self {
            position: (client - canvas_rect.min).to_pos2(),
            source,
        }
    }
}

/// Mouse and touch input unified into one pointer-like event
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        location: InputLocation,
    },
    PointerMove {
        location: InputLocation,
    },
    /// Touch releases carry no position
    PointerUp {
        location: Option<InputLocation>,
    },
    /// The pointer left the canvas, or the window altogether
    PointerLeave {
        last_known_location: Option<InputLocation>,
    },
}

impl InputEvent {
    pub fn position(&self) -> Option<Pos2> {
        self.location().map(|location| location.position)
    }

    pub fn location(&self) -> Option<InputLocation> {
        match self {
            InputEvent::PointerDown { location } | InputEvent::PointerMove { location } => Some(*location),
            InputEvent::PointerUp { location } => *location,
            InputEvent::PointerLeave { last_known_location } => *last_known_location,
        }
    }
}

/// Turns raw egui input into [`InputEvent`]s for the canvas.
///
/// Only the first touch is followed; further fingers are ignored until it
/// lifts. egui synthesizes mouse events from touches, so mouse events are
/// dropped for any frame that carries touches and while a touch is held.
///
/// A press only starts a gesture where the canvas is the topmost layer, so
/// popups and windows floating over it keep their clicks. Moves, releases
/// and leaves are always passed on.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    pointer_inside: bool,
    active_touch: Option<TouchId>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            pointer_inside: false,
            active_touch: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn mouse_location(&self, pos: Pos2) -> InputLocation {
        InputLocation::from_client(pos, self.canvas_rect, PointerSource::Mouse)
    }

    /// Process this frame's egui input and generate our InputEvents.
    ///
    /// `canvas_layer` is the layer the canvas is painted on. Presses landing
    /// on any other interactable layer are ignored.
    pub fn process_input(&mut self, ctx: &Context, canvas_layer: LayerId) -> Vec<InputEvent> {
        let raw_events = ctx.input(|input| input.events.clone());
        self.process_events_where(&raw_events, |pos| match ctx.layer_id_at(pos) {
            None => true,
            Some(layer) => layer == canvas_layer || layer.order == Order::Background,
        })
    }

    /// Convert raw events. A press or touch start at `pos` only begins a
    /// gesture when `accepts_press(pos)` holds.
    pub fn process_events_where(
        &mut self,
        raw_events: &[Event],
        accepts_press: impl Fn(Pos2) -> bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let frame_has_touch = raw_events.iter().any(|e| matches!(e, Event::Touch { .. }));

        for event in raw_events {
            match event {
                Event::Touch { id, phase, pos, .. } => {
                    if *phase == TouchPhase::Start && !accepts_press(*pos) {
                        continue;
                    }
                    self.handle_touch(*id, *phase, *pos, &mut events);
                }
                _ if frame_has_touch || self.active_touch.is_some() => {}
                Event::PointerMoved(pos) => {
                    let inside = self.canvas_rect.contains(*pos);
                    if inside {
                        events.push(InputEvent::PointerMove {
                            location: self.mouse_location(*pos),
                        });
                    } else if self.pointer_inside {
                        events.push(InputEvent::PointerLeave {
                            last_known_location: Some(self.mouse_location(*pos)),
                        });
                    }
                    self.pointer_inside = inside;
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if !self.canvas_rect.contains(*pos) || (*pressed && !accepts_press(*pos)) {
                        continue;
                    }
                    self.pointer_inside = true;
                    let location = self.mouse_location(*pos);
                    events.push(if *pressed {
                        InputEvent::PointerDown { location }
                    } else {
                        InputEvent::PointerUp {
                            location: Some(location),
                        }
                    });
                }
                Event::PointerGone => {
                    if self.pointer_inside {
                        events.push(InputEvent::PointerLeave {
                            last_known_location: None,
                        });
                    }
                    self.pointer_inside = false;
                }
                _ => {}
            }
        }

        events
    }

    fn handle_touch(&mut self, id: TouchId, phase: TouchPhase, pos: Pos2, events: &mut Vec<InputEvent>) {
        let location = InputLocation::from_client(pos, self.canvas_rect, PointerSource::Touch(id.0));
        match (phase, self.active_touch) {
            (TouchPhase::Start, None) if self.canvas_rect.contains(pos) => {
                self.active_touch = Some(id);
                events.push(InputEvent::PointerDown { location });
            }
            (TouchPhase::Move, Some(active)) if active == id => {
                events.push(InputEvent::PointerMove { location });
            }
            (TouchPhase::End | TouchPhase::Cancel, Some(active)) if active == id => {
                self.active_touch = None;
                events.push(InputEvent::PointerUp { location: None });
            }
            _ => {
                log::trace!("Ignoring touch {:?} in phase {:?}", id, phase);
            }
        }
    }
}

//! Behavioural tests for restyling overlays with renderer JSON.
#![expect(
    clippy::expect_used,
    reason = "behaviour steps fail fast when the world is not prepared"
)]

use std::cell::RefCell;

use geo::Coord;
use geoint_core::{
    Color, Geometry, Graphic, GraphicsOverlay, Renderer, RendererJsonError, SimpleLineStyle,
    SimpleLineSymbol, SpatialReference, Symbol,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

fn original_renderer() -> Renderer {
    Renderer::new(SimpleLineSymbol::new(
        SimpleLineStyle::Solid,
        Color::BLACK,
        5.0,
    ))
}

/// World state shared by the renderer scenarios.
#[derive(Debug, Default)]
struct RendererWorld {
    overlay: RefCell<Option<GraphicsOverlay>>,
    outcome: RefCell<Option<Result<(), RendererJsonError>>>,
}

impl RendererWorld {
    fn apply(&self, json: &str) {
        let outcome = Renderer::from_json(json).map(|renderer| {
            self.overlay
                .borrow_mut()
                .as_mut()
                .expect("overlay prepared")
                .set_renderer(renderer);
        });
        self.outcome.replace(Some(outcome));
    }

    fn renderer(&self) -> Renderer {
        self.overlay
            .borrow()
            .as_ref()
            .expect("overlay prepared")
            .renderer()
            .clone()
    }
}

#[fixture]
fn world() -> RendererWorld {
    RendererWorld::default()
}

#[given("an overlay holding two line graphics")]
fn given_overlay(world: &RendererWorld) {
    let mut overlay = GraphicsOverlay::new(original_renderer());
    for offset in [0.0, 1.0] {
        overlay.push(Graphic::new(Geometry::polyline(
            vec![Coord { x: offset, y: 0.0 }, Coord { x: offset, y: 1.0 }],
            SpatialReference::WGS84,
        )));
    }
    world.overlay.replace(Some(overlay));
}

#[when("I apply a dashed red simple renderer from JSON")]
fn when_apply_simple(world: &RendererWorld) {
    world.apply(
        r#"{"type": "simple", "symbol": {"type": "esriSLS", "style": "esriSLSDash",
            "color": [255, 0, 0, 255], "width": 3}}"#,
    );
}

#[when("I apply a class breaks renderer from JSON")]
fn when_apply_class_breaks(world: &RendererWorld) {
    world.apply(r#"{"type": "classBreaks", "field": "population"}"#);
}

#[then("the overlay draws with a dashed red line")]
fn then_dashed_red(world: &RendererWorld) {
    let renderer = world.renderer();
    let Symbol::Line(line) = renderer.symbol else {
        panic!("expected a line symbol, got {:?}", renderer.symbol);
    };
    assert_eq!(line.style, SimpleLineStyle::Dash);
    assert_eq!(line.color, Color::rgb(255, 0, 0));
}

#[then("the overlay still holds two graphics")]
fn then_two_graphics(world: &RendererWorld) {
    let overlay = world.overlay.borrow();
    assert_eq!(overlay.as_ref().map(GraphicsOverlay::len), Some(2));
}

#[then("the renderer is rejected as unsupported")]
fn then_rejected(world: &RendererWorld) {
    let outcome = world.outcome.borrow();
    match outcome.as_ref().expect("renderer applied") {
        Err(RendererJsonError::Unsupported { kind }) => assert_eq!(kind, "classBreaks"),
        other => panic!("expected an unsupported renderer error, got {other:?}"),
    }
}

#[then("the overlay keeps its original renderer")]
fn then_original(world: &RendererWorld) {
    assert_eq!(world.renderer(), original_renderer());
}

#[scenario(path = "tests/features/renderer.feature", index = 0)]
fn applying_a_simple_line_renderer(world: RendererWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/renderer.feature", index = 1)]
fn rejecting_a_class_breaks_renderer(world: RendererWorld) {
    let _ = world;
}

use cardgen::{
    fonts::{FontSet, GlyphMetrics, GlyphSource},
    raster::Canvas,
    render_card, BackgroundFit, Card, CardTemplate, CardText, Surface,
};
use image::{Rgba, RgbaImage};

/// Solid 10x20 blocks on the baseline, no ink for spaces
struct Blocks;

impl GlyphSource for Blocks {
    fn rasterize(&self, c: char, _px: f32) -> (GlyphMetrics, Vec<u8>) {
        if c == ' ' {
            let m = GlyphMetrics {
                advance: 10.0,
                ..GlyphMetrics::default()
            };
            return (m, Vec::new());
        }
        let m = GlyphMetrics {
            xmin: 0,
            ymin: 0,
            width: 10,
            height: 20,
            advance: 10.0,
        };
        (m, vec![0xFF; 200])
    }
}

fn canvas() -> Canvas {
    let mut fonts = FontSet::new();
    fonts.insert("goudy", Blocks);
    fonts.insert("mplantin", Blocks);
    Canvas::new(fonts).unwrap()
}

fn background() -> RgbaImage {
    RgbaImage::from_pixel(750, 1050, Rgba([128, 128, 128, 255]))
}

fn text(title: &str) -> CardText {
    CardText {
        title: title.to_string(),
        ..CardText::default()
    }
}

#[test]
fn title_is_drawn_at_scaled_origin() {
    let mut canvas = canvas();
    let template = CardTemplate::classic();
    render_card(
        &mut canvas,
        &template,
        &text("X"),
        &background(),
        BackgroundFit::Natural,
    )
    .unwrap();
    let px = canvas.to_image();

    // The title origin (60, 76) is scaled to (66, 76), the glyph sits on top of it.
    let [r, g, b, _] = px.get_pixel(71, 66).0;
    assert!(r > 240 && g > 240 && b > 240, "expected white title ink");

    // Left of the title there is only background
    assert_eq!(px.get_pixel(50, 66).0, [128, 128, 128, 255]);

    // The shadow is offset by (2, 2), so it shows below the baseline
    let [r, _, _, _] = px.get_pixel(71, 77).0;
    assert!(r < 100, "expected dark shadow, got {}", r);
}

#[test]
fn rules_are_black_without_shadow() {
    let mut canvas = canvas();
    let template = CardTemplate::classic();
    render_card(
        &mut canvas,
        &template,
        &text(""),
        &background(),
        BackgroundFit::Natural,
    )
    .unwrap();
    let px = canvas.to_image();
    assert_eq!(px.get_pixel(105, 690).0, [0, 0, 0, 255]);
    assert_eq!(px.get_pixel(105, 702).0, [128, 128, 128, 255]);
}

#[test]
fn canvas_size_is_constant() {
    let mut canvas = canvas();
    let template = CardTemplate::classic();
    let big = RgbaImage::from_pixel(1200, 1600, Rgba([0, 0, 0, 255]));
    for fit in [BackgroundFit::Natural, BackgroundFit::Contain] {
        render_card(&mut canvas, &template, &text("Big"), &big, fit).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (750, 1050));
        assert_eq!(canvas.to_image().dimensions(), (750, 1050));
    }
}

#[test]
fn last_render_wins() {
    let template = CardTemplate::classic();
    let bg = background();

    let mut twice = canvas();
    render_card(&mut twice, &template, &text("First Card"), &bg, BackgroundFit::Natural).unwrap();
    render_card(&mut twice, &template, &text("Two"), &bg, BackgroundFit::Natural).unwrap();

    let mut once = canvas();
    render_card(&mut once, &template, &text("Two"), &bg, BackgroundFit::Natural).unwrap();

    assert!(twice.to_image() == once.to_image());
}

#[test]
fn missing_fonts_fall_back_or_skip() {
    let template = CardTemplate::classic();
    let bg = background();

    let mut fonts = FontSet::new();
    fonts.insert("mplantin", Blocks);
    let mut fallback = Canvas::new(fonts).unwrap();
    render_card(&mut fallback, &template, &text("X"), &bg, BackgroundFit::Natural).unwrap();
    assert!(fallback.to_image().get_pixel(71, 66).0[0] > 240);

    let mut bare = Canvas::new(FontSet::new()).unwrap();
    render_card(&mut bare, &template, &text("X"), &bg, BackgroundFit::Natural).unwrap();
    assert!(bare.to_image() == bg);
}

#[test]
fn card_from_ron() {
    let src = r#"(
        name: "Wall of Wood",
        set: "SBA",
        rarity: C,
        types: ["Creature"],
        subtypes: ["Wall"],
        cost: "G",
        rules: ["Defender", "~ can block any number of creatures."],
    )"#;
    let card: Card = ron::from_str(src).unwrap();
    assert_eq!(card.cost.cmc(), 1);

    let text = CardText::from(&card);
    assert_eq!(text.type_line, "Creature — Wall");
    assert_eq!(text.rules[1], "Wall of Wood can block any number of creatures.");
}

use std::path::PathBuf;

use cardgen::{
    draw_debug_border,
    fonts::{FontSet, DEFAULT_FONTS},
    raster::{load_image, Canvas},
    render_card, CardTemplate,
};
use color_eyre::eyre::{self, eyre, Context};
use log::{info, warn};

use super::opt::Options;

/// The font files to load, explicit `--font` args take precedence
fn font_files(opt: &Options) -> Vec<(String, PathBuf)> {
    let mut files: Vec<(String, PathBuf)> = opt
        .fonts
        .iter()
        .map(|f| (f.family.clone(), f.path.clone()))
        .collect();
    for (family, file) in DEFAULT_FONTS {
        if !files.iter().any(|(f, _)| f == family) {
            files.push((family.to_owned(), opt.fonts_path.join(file)));
        }
    }
    files
}

fn load_fonts(opt: &Options, template: &CardTemplate) -> FontSet {
    let mut fonts = FontSet::new();
    for (family, path) in font_files(opt) {
        fonts.load_or_warn(&family, &path);
    }
    if fonts.is_empty() {
        warn!("No fonts could be loaded, the card will have no text");
        return fonts;
    }
    for family in template.families() {
        if !fonts.contains(family) {
            warn!("Font '{}' is missing, falling back to another font", family);
        }
    }
    fonts
}

pub fn run(opt: &Options) -> eyre::Result<()> {
    if opt.out.exists() && !opt.force {
        return Err(eyre!(
            "'{}' already exists, use --force to overwrite",
            opt.out.display()
        ));
    }

    let text = opt.text().wrap_err("failed to load card")?;
    let background = load_image(&opt.background)
        .wrap_err_with(|| format!("failed to read background '{}'", opt.background.display()))?;

    let template = CardTemplate::classic();
    let mut canvas = Canvas::new(load_fonts(opt, &template))?;
    info!("Rendering {:?}", text.title);
    render_card(&mut canvas, &template, &text, &background, opt.fit)?;
    if opt.debug_border {
        draw_debug_border(&mut canvas)?;
    }

    canvas
        .save_png(&opt.out)
        .wrap_err_with(|| format!("failed to write '{}'", opt.out.display()))?;
    info!("Saved {}", opt.out.display());
    Ok(())
}

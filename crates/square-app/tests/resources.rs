use square_app::ResourcePaths;
use square_app::config::MVP_UNIFORM;
use square_engine::render::Vertex;
use square_engine::shader::{check_program, ShaderSources, Stage, UniformInfo};
use square_engine::texture::load_rgba;

// ── shader ────────────────────────────────────────────────────────────────

#[test]
fn shipped_shader_compiles_and_links() {
    let paths = ResourcePaths::default();
    let sources = ShaderSources::load(&paths.shader_path()).unwrap();

    assert!(sources.stage(Stage::Vertex).starts_with("#version"));
    assert!(sources.stage(Stage::Fragment).starts_with("#version"));

    let report = check_program(&sources, &Vertex::locations(), MVP_UNIFORM);
    assert!(report.is_ok(), "{:?}", report.diagnostics);
    assert_eq!(report.mvp, Some(UniformInfo { group: 0, binding: 0 }));
}

// ── image ─────────────────────────────────────────────────────────────────

#[test]
fn shipped_image_decodes_to_rgba8() {
    let paths = ResourcePaths::default();
    let image = load_rgba(&paths.image_path()).unwrap();

    assert!(image.width > 0 && image.height > 0);
    assert_eq!(image.pixels.len(), (image.width * image.height * 4) as usize);
}

#[test]
fn missing_image_is_an_error() {
    let err = load_rgba(std::path::Path::new("Resources/does-not-exist.png")).unwrap_err();
    assert!(format!("{err:#}").contains("does-not-exist.png"));
}

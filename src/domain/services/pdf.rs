//! Deterministic certificate layouts on a fixed A4 landscape page.
//!
//! All coordinates, colors and font sizes are constants of the two designs;
//! the only per-certificate variability is the substituted text. Design
//! coordinates are expressed top-left in millimeters and flipped to PDF
//! space on output. Rendering is purely in-memory and never touches
//! persistence.

use crate::domain::models::certificate::{IssuedCertificate, TemplateData};
use crate::domain::services::defaults;
use crate::error::AppError;
use chrono::{Datelike, NaiveDate};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    calculate_points_for_circle, BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument,
    PdfLayerReference, Point, Polygon, Rgb,
};

const PAGE_WIDTH_MM: f64 = 297.0;
const PAGE_HEIGHT_MM: f64 = 210.0;
const MM_PER_PT: f64 = 0.352_778;
const CENTER_X: f64 = 148.5;

/// Human-readable issue date, M/D/YYYY.
pub fn format_display_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// The "achievement" design used by ad hoc admin generation and preview.
pub fn render_achievement(
    data: &TemplateData,
    certificate_number: &str,
    brand: &str,
) -> Result<Vec<u8>, AppError> {
    let (doc, page, layer) = PdfDocument::new(
        "Certificate of Achievement",
        Mm(PAGE_WIDTH_MM as _),
        Mm(PAGE_HEIGHT_MM as _),
        "certificate",
    );
    let canvas = Canvas::new(&doc, doc.get_page(page).get_layer(layer))?;

    // Layered background fills.
    canvas.fill(rgb(240, 230, 255));
    canvas.rect_filled(0.0, 0.0, 297.0, 210.0);
    canvas.fill(rgb(230, 220, 250));
    canvas.rect_filled(20.0, 20.0, 257.0, 170.0);
    canvas.fill(rgb(220, 210, 245));
    canvas.rect_filled(30.0, 30.0, 237.0, 150.0);

    // Corner wedges, dark purple under light purple.
    canvas.fill(rgb(80, 10, 120));
    canvas.triangle((0.0, 210.0), (0.0, 140.0), (70.0, 210.0));
    canvas.fill(rgb(120, 40, 160));
    canvas.triangle((0.0, 210.0), (0.0, 170.0), (40.0, 210.0));

    canvas.fill(rgb(80, 10, 120));
    canvas.triangle((0.0, 0.0), (0.0, 70.0), (70.0, 0.0));
    canvas.fill(rgb(120, 40, 160));
    canvas.triangle((0.0, 0.0), (0.0, 40.0), (40.0, 0.0));

    canvas.fill(rgb(80, 10, 120));
    canvas.triangle((297.0, 210.0), (297.0, 140.0), (227.0, 210.0));
    canvas.fill(rgb(120, 40, 160));
    canvas.triangle((297.0, 210.0), (297.0, 170.0), (257.0, 210.0));

    canvas.fill(rgb(80, 10, 120));
    canvas.triangle((297.0, 0.0), (297.0, 70.0), (227.0, 0.0));
    canvas.fill(rgb(120, 40, 160));
    canvas.triangle((297.0, 0.0), (297.0, 40.0), (257.0, 0.0));

    // Hexagonal hub and node grid, top left.
    canvas.stroke(rgb(100, 50, 150));
    canvas.fill(rgb(100, 50, 150));
    canvas.circle(40.0, 40.0, 15.0);

    canvas.line_width(0.5);
    for i in 0..3 {
        let x = 70.0 + (i as f64) * 30.0;
        canvas.line(x, 40.0, x + 20.0, 40.0);
        canvas.circle(x, 40.0, 2.0);
        canvas.circle(x + 20.0, 40.0, 2.0);

        if i < 2 {
            canvas.line(x, 40.0, x + 20.0, 60.0);
            canvas.circle(x + 20.0, 60.0, 2.0);
        }
    }

    // Bottom right node cluster.
    canvas.fill(rgb(120, 40, 160));
    canvas.circle(260.0, 180.0, 5.0);
    canvas.line_width(0.3);
    canvas.line(260.0, 175.0, 280.0, 165.0);
    canvas.line(260.0, 185.0, 280.0, 190.0);
    canvas.circle(280.0, 165.0, 1.5);
    canvas.circle(280.0, 190.0, 1.5);

    // Brand mark, top right.
    canvas.fill(rgb(255, 255, 255));
    canvas.text_right(brand, 22.0, 277.0, 25.0, Face::Regular);
    canvas.text_right(&data.issue_date.year().to_string(), 16.0, 277.0, 35.0, Face::Regular);

    canvas.stroke(rgb(255, 255, 255));
    canvas.line_width(1.0);
    canvas.line(237.0, 40.0, 277.0, 40.0);

    // Title with a drop-shadow pass.
    canvas.fill(rgb(60, 30, 110));
    canvas.text_centered("CERTIFICATE", 52.0, CENTER_X + 2.0, 52.0, Face::Bold);
    canvas.fill(rgb(20, 20, 80));
    canvas.text_centered("CERTIFICATE", 52.0, CENTER_X, 50.0, Face::Bold);

    canvas.fill(rgb(60, 30, 110));
    canvas.text_centered("OF ACHIEVEMENT", 32.0, CENTER_X + 2.0, 67.0, Face::Bold);
    canvas.fill(rgb(20, 20, 80));
    canvas.text_centered("OF ACHIEVEMENT", 32.0, CENTER_X, 65.0, Face::Bold);

    canvas.stroke(rgb(100, 50, 150));
    canvas.line_width(1.5);
    canvas.line(108.5, 72.0, 188.5, 72.0);

    canvas.fill(rgb(0, 0, 0));
    canvas.text_centered("THIS CERTIFICATE IS AWARDED TO", 20.0, CENTER_X, 90.0, Face::Bold);

    canvas.fill(rgb(60, 0, 100));
    canvas.text_centered(&data.participant_name, 36.0, CENTER_X, 105.0, Face::Bold);

    // Underline sized to the recipient name, the one data-driven
    // measurement in the layout.
    let name_width = text_width_mm(&data.participant_name, 36.0);
    canvas.stroke(rgb(100, 20, 140));
    canvas.line_width(1.0);
    canvas.line(
        CENTER_X - name_width / 2.0 - 15.0,
        115.0,
        CENTER_X + name_width / 2.0 + 15.0,
        115.0,
    );

    let position = data.position.as_deref().unwrap_or(defaults::DEFAULT_POSITION);
    canvas.fill(rgb(20, 20, 20));
    canvas.text_centered(
        &format!("for securing {} position in", position),
        16.0,
        CENTER_X,
        130.0,
        Face::Regular,
    );
    canvas.text_centered(&data.event_name, 16.0, CENTER_X, 140.0, Face::Bold);
    canvas.text_centered(
        &format!("held on {} at", format_display_date(data.issue_date)),
        16.0,
        CENTER_X,
        150.0,
        Face::Regular,
    );
    let venue = data.venue.as_deref().unwrap_or(defaults::DEFAULT_VENUE);
    canvas.text_centered(venue, 16.0, CENTER_X, 160.0, Face::Bold);

    let custom = data
        .custom_text
        .as_deref()
        .unwrap_or(defaults::DEFAULT_APPRECIATION_TEXT);
    canvas.fill(rgb(40, 10, 70));
    canvas.text_centered(custom, 14.0, CENTER_X, 175.0, Face::Italic);

    canvas.stroke(rgb(100, 50, 150));
    canvas.line_width(0.75);
    canvas.line(88.5, 185.0, 208.5, 185.0);

    canvas.fill(rgb(20, 20, 20));
    canvas.text_centered("Presented by", 14.0, CENTER_X, 195.0, Face::Bold);
    let authority = data
        .certifying_authority
        .as_deref()
        .unwrap_or(defaults::DEFAULT_CERTIFYING_AUTHORITY);
    canvas.text_centered(authority, 11.0, CENTER_X, 202.0, Face::Bold);

    canvas.fill(rgb(60, 60, 60));
    canvas.text_right(
        &format!("Certificate #: {}", certificate_number),
        9.0,
        270.0,
        205.0,
        Face::Bold,
    );

    // Decorative stamp in the bottom left, laid out like a scannable code.
    canvas.fill(rgb(80, 10, 120));
    canvas.rect_filled(20.0, 185.0, 15.0, 15.0);
    canvas.fill(rgb(255, 255, 255));
    canvas.rect_filled(22.0, 187.0, 4.0, 4.0);
    canvas.rect_filled(29.0, 187.0, 4.0, 4.0);
    canvas.rect_filled(22.0, 194.0, 4.0, 4.0);
    canvas.rect_filled(27.0, 190.0, 2.0, 6.0);

    doc.save_to_bytes()
        .map_err(|e| AppError::Rendering(e.to_string()))
}

/// The "participation" design used for self-service lookup/download.
/// Fails before any drawing when the stored template payload is absent.
pub fn render_participation(certificate: &IssuedCertificate) -> Result<Vec<u8>, AppError> {
    let data = certificate
        .template()
        .ok_or_else(|| AppError::Rendering("Certificate template data not found".into()))?;

    let (doc, page, layer) = PdfDocument::new(
        "Certificate of Participation",
        Mm(PAGE_WIDTH_MM as _),
        Mm(PAGE_HEIGHT_MM as _),
        "certificate",
    );
    let canvas = Canvas::new(&doc, doc.get_page(page).get_layer(layer))?;

    canvas.fill(rgb(255, 255, 255));
    canvas.rect_filled(0.0, 0.0, 297.0, 210.0);

    canvas.stroke(rgb(44, 62, 80));
    canvas.line_width(0.5);
    canvas.rect_stroked(10.0, 10.0, 277.0, 190.0);

    canvas.stroke(rgb(41, 128, 185));
    canvas.line_width(1.5);
    canvas.line(10.0, 30.0, 287.0, 30.0);
    canvas.line(10.0, 180.0, 287.0, 180.0);

    canvas.fill(rgb(44, 62, 80));
    canvas.text_centered("CERTIFICATE OF PARTICIPATION", 32.0, CENTER_X, 25.0, Face::Bold);

    canvas.fill(rgb(0, 0, 0));
    canvas.text_centered("This is to certify that", 16.0, CENTER_X, 70.0, Face::Regular);

    canvas.fill(rgb(41, 128, 185));
    canvas.text_centered(
        &certificate.participant_full_name,
        28.0,
        CENTER_X,
        90.0,
        Face::Bold,
    );

    let custom = data
        .custom_text
        .as_deref()
        .unwrap_or(defaults::DEFAULT_PARTICIPATION_TEXT);
    canvas.fill(rgb(0, 0, 0));
    canvas.text_centered(custom, 16.0, CENTER_X, 110.0, Face::Regular);

    canvas.text_centered(&certificate.event_name, 20.0, CENTER_X, 125.0, Face::Bold);

    canvas.text_centered(
        &format!("Issue Date: {}", format_display_date(certificate.issue_date)),
        12.0,
        CENTER_X,
        145.0,
        Face::Regular,
    );
    canvas.text_centered(
        &format!("Certificate #: {}", certificate.certificate_number),
        10.0,
        CENTER_X,
        155.0,
        Face::Regular,
    );

    let authority = data
        .certifying_authority
        .as_deref()
        .unwrap_or(defaults::FALLBACK_AUTHORITY);
    canvas.text_centered(authority, 10.0, CENTER_X, 170.0, Face::Bold);
    canvas.text_centered("Authorized Signatory", 12.0, CENTER_X, 175.0, Face::Regular);

    doc.save_to_bytes()
        .map_err(|e| AppError::Rendering(e.to_string()))
}

#[derive(Clone, Copy)]
enum Face {
    Regular,
    Bold,
    Italic,
}

/// Thin wrapper over a page layer plus the three Helvetica faces, working in
/// top-left design coordinates.
struct Canvas {
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Canvas {
    fn new(
        doc: &printpdf::PdfDocumentReference,
        layer: PdfLayerReference,
    ) -> Result<Self, AppError> {
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AppError::Rendering(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| AppError::Rendering(e.to_string()))?;
        let italic = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| AppError::Rendering(e.to_string()))?;
        Ok(Self { layer, regular, bold, italic })
    }

    fn font(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
            Face::Italic => &self.italic,
        }
    }

    fn fill(&self, color: Color) {
        self.layer.set_fill_color(color);
    }

    fn stroke(&self, color: Color) {
        self.layer.set_outline_color(color);
    }

    fn line_width(&self, width_pt: f64) {
        self.layer.set_outline_thickness(width_pt as _);
    }

    fn point(&self, x: f64, y: f64) -> Point {
        Point::new(Mm(x as _), Mm((PAGE_HEIGHT_MM - y) as _))
    }

    fn rect_ring(&self, x: f64, y: f64, w: f64, h: f64) -> Vec<(Point, bool)> {
        vec![
            (self.point(x, y), false),
            (self.point(x + w, y), false),
            (self.point(x + w, y + h), false),
            (self.point(x, y + h), false),
        ]
    }

    fn rect_filled(&self, x: f64, y: f64, w: f64, h: f64) {
        self.layer.add_polygon(Polygon {
            rings: vec![self.rect_ring(x, y, w, h)],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn rect_stroked(&self, x: f64, y: f64, w: f64, h: f64) {
        self.layer.add_polygon(Polygon {
            rings: vec![self.rect_ring(x, y, w, h)],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn triangle(&self, a: (f64, f64), b: (f64, f64), c: (f64, f64)) {
        self.layer.add_polygon(Polygon {
            rings: vec![vec![
                (self.point(a.0, a.1), false),
                (self.point(b.0, b.1), false),
                (self.point(c.0, c.1), false),
            ]],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn circle(&self, cx: f64, cy: f64, radius: f64) {
        let ring = calculate_points_for_circle(
            Mm(radius as _),
            Mm(cx as _),
            Mm((PAGE_HEIGHT_MM - cy) as _),
        );
        self.layer.add_polygon(Polygon {
            rings: vec![ring],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.layer.add_line(Line {
            points: vec![(self.point(x1, y1), false), (self.point(x2, y2), false)],
            is_closed: false,
        });
    }

    fn text_centered(&self, text: &str, size_pt: f64, cx: f64, y: f64, face: Face) {
        let x = cx - text_width_mm(text, size_pt) / 2.0;
        self.layer.use_text(
            text,
            size_pt as _,
            Mm(x as _),
            Mm((PAGE_HEIGHT_MM - y) as _),
            self.font(face),
        );
    }

    fn text_right(&self, text: &str, size_pt: f64, right_x: f64, y: f64, face: Face) {
        let x = right_x - text_width_mm(text, size_pt);
        self.layer.use_text(
            text,
            size_pt as _,
            Mm(x as _),
            Mm((PAGE_HEIGHT_MM - y) as _),
            self.font(face),
        );
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        (r as f64 / 255.0) as _,
        (g as f64 / 255.0) as _,
        (b as f64 / 255.0) as _,
        None,
    ))
}

/// Approximate Helvetica advance width. Centering and right-alignment only
/// need to be deterministic and close, not metrically exact.
fn char_width_em(c: char) -> f64 {
    match c {
        'i' | 'j' | 'l' | '\'' | '|' => 0.22,
        'f' | 't' | 'r' | 'I' | '.' | ',' | ':' | ';' | '!' | '(' | ')' | '[' | ']' | ' ' => 0.30,
        '-' => 0.33,
        'm' | 'M' | 'W' | '@' => 0.94,
        'w' => 0.72,
        'A'..='Z' => 0.70,
        '0'..='9' => 0.56,
        '#' | '&' | '%' => 0.80,
        _ => 0.52,
    }
}

pub(crate) fn text_width_mm(text: &str, font_size_pt: f64) -> f64 {
    let em: f64 = text.chars().map(char_width_em).sum();
    em * font_size_pt * MM_PER_PT
}

use image::{GenericImageView, ImageFormat};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use terminal_size::{terminal_size, Width};

use crate::config::constants::MAX_PREVIEW_COLUMNS;

const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const RESET: &str = "\x1b[0m";

pub struct Renderer;

impl Renderer {
    /// Coarse ANSI half-block preview of the uploaded photo, fitted to the
    /// terminal. Decode failures only skip the preview; the bytes still go
    /// to the model as-is.
    pub fn render_image_preview(file_name: &str, bytes: &[u8]) {
        let img = match image::load_from_memory(bytes) {
            Ok(img) => img,
            Err(e) => {
                log::warn!("Could not decode image for preview: {}", e);
                return;
            }
        };

        if let Ok(format) = image::guess_format(bytes) {
            if format != ImageFormat::Jpeg {
                // The request data URI still says image/jpeg for these.
                log::debug!("Source image decoded as {:?}", format);
            }
        }

        let (width, height) = img.dimensions();
        println!(
            "🖼  {} ({}x{}, {:.1} KB)",
            file_name,
            width,
            height,
            bytes.len() as f64 / 1024.0
        );

        let columns = Self::preview_columns();
        let thumb = img.thumbnail(columns, columns).to_rgb8();

        for y in (0..thumb.height()).step_by(2) {
            let mut line = String::new();
            for x in 0..thumb.width() {
                let top = thumb.get_pixel(x, y).0;
                line.push_str(&format!("\x1b[38;2;{};{};{}m", top[0], top[1], top[2]));

                if y + 1 < thumb.height() {
                    let bottom = thumb.get_pixel(x, y + 1).0;
                    line.push_str(&format!("\x1b[48;2;{};{};{}m", bottom[0], bottom[1], bottom[2]));
                }

                line.push('▀');
                line.push_str(RESET);
            }
            println!("{}", line);
        }
    }

    fn preview_columns() -> u32 {
        match terminal_size() {
            Some((Width(cols), _)) => MAX_PREVIEW_COLUMNS.min(cols as u32),
            None => MAX_PREVIEW_COLUMNS,
        }
    }

    /// Print the model's markdown reply with ANSI styling.
    pub fn render_result(markdown: &str) {
        println!();
        println!("{}", Self::markdown_to_ansi(markdown));
    }

    pub fn markdown_to_ansi(markdown: &str) -> String {
        let mut out = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Start(Tag::Strong) | Event::Start(Tag::Heading { .. }) => out.push_str(BOLD),
                Event::End(TagEnd::Strong) => out.push_str(RESET),
                Event::End(TagEnd::Heading(_)) => {
                    out.push_str(RESET);
                    out.push('\n');
                }
                Event::Start(Tag::Emphasis) => out.push_str(ITALIC),
                Event::End(TagEnd::Emphasis) => out.push_str(RESET),
                Event::Start(Tag::Item) => out.push_str("  • "),
                Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Item) => out.push('\n'),
                Event::Text(text) => out.push_str(&text),
                Event::Code(code) => {
                    out.push_str(BOLD);
                    out.push_str(&code);
                    out.push_str(RESET);
                }
                Event::SoftBreak | Event::HardBreak => out.push('\n'),
                _ => {}
            }
        }

        out.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_reading_labels_get_ansi_bold() {
        let rendered = Renderer::markdown_to_ansi("**최고(수축기) 혈압**: 120mmHg");
        assert_eq!(rendered, "\x1b[1m최고(수축기) 혈압\x1b[0m: 120mmHg");
    }

    #[test]
    fn paragraphs_are_separated() {
        let rendered = Renderer::markdown_to_ansi("first\n\nsecond");
        assert_eq!(rendered, "first\nsecond");
    }

    #[test]
    fn unrecognizable_photo_message_renders_verbatim_text() {
        let rendered = Renderer::markdown_to_ansi("**죄송합니다. 인식할 수 없는 사진입니다.**");
        assert!(rendered.contains("죄송합니다. 인식할 수 없는 사진입니다."));
    }
}

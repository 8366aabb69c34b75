use svg::{
    Document, Node,
    node::element::{Group, Image, Path, Rectangle, Text, Title, path::Data},
};

use super::{Background, CanvasConfig, DrawingSurface};
use crate::{
    constants::{
        MARKER_COLOR, PASS_STROKE_COLOR, PASS_STROKE_WIDTH, TABLE_COLUMN_WIDTH, TABLE_ROW_HEIGHT,
        TABLE_TEXT_COLOR,
    },
    report::ReportTable,
    types::Coordinate,
};

/// A [DrawingSurface] backed by an SVG document sized to the canvas.
/// Tables are stacked below the pitch and grow the document height.
#[derive(Debug)]
pub struct SvgSurface {
    document: Document,
    width: u32,
    height: u32,
    table_height: u32,
}

impl SvgSurface {
    pub fn new(config: &CanvasConfig) -> Self {
        let mut document = Document::new()
            .set("id", config.canvas_id())
            .set("width", config.width)
            .set("height", config.height)
            .add(Title::new(config.play_name.clone()));

        match &config.background {
            Background::Colour(colour) => {
                document.append(
                    Rectangle::new()
                        .set("x", 0)
                        .set("y", 0)
                        .set("width", config.width)
                        .set("height", config.height)
                        .set("fill", colour.as_str()),
                );
            }
            Background::Image(href) => {
                document.append(
                    Image::new()
                        .set("href", href.as_str())
                        .set("x", 0)
                        .set("y", 0)
                        .set("width", config.width)
                        .set("height", config.height)
                        .set("preserveAspectRatio", "none"),
                );
            }
        }

        SvgSurface {
            document,
            width: config.width,
            height: config.height,
            table_height: 0,
        }
    }

    pub fn into_document(mut self) -> Document {
        self.document
            .assign("height", self.height + self.table_height);
        self.document
    }

    fn text_line(&self, content: String, column: usize, row: u32) -> Text {
        Text::new(content)
            .set("x", column as u32 * TABLE_COLUMN_WIDTH + 4)
            .set("y", self.height + self.table_height + (row + 1) * TABLE_ROW_HEIGHT)
            .set("fill", TABLE_TEXT_COLOR)
            .set("font-family", "sans-serif")
            .set("font-size", 12)
    }
}

impl DrawingSurface for SvgSurface {
    fn draw_rect(&mut self, at: Coordinate, width: f64, height: f64) {
        self.document.append(
            Rectangle::new()
                .set("x", at.x)
                .set("y", at.y)
                .set("width", width)
                .set("height", height)
                .set("fill", MARKER_COLOR),
        );
    }

    fn draw_image(&mut self, href: &str, at: Coordinate, size: f64) {
        self.document.append(
            Image::new()
                .set("href", href)
                .set("x", at.x)
                .set("y", at.y)
                .set("width", size)
                .set("height", size),
        );
    }

    fn draw_line(&mut self, points: &[Coordinate]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let mut data = Data::new().move_to::<(f64, f64)>((*first).into());
        for point in rest {
            data = data.line_to::<(f64, f64)>((*point).into());
        }

        self.document.append(
            Path::new()
                .set("fill", "none")
                .set("stroke", PASS_STROKE_COLOR)
                .set("stroke-width", PASS_STROKE_WIDTH)
                .set("stroke-linejoin", "round")
                .set("d", data),
        );
    }

    fn render_table(&mut self, table: &ReportTable) {
        let mut group = Group::new().set("class", "report-table");

        group.append(
            self.text_line(table.title.clone(), 0, 0)
                .set("font-weight", "bold"),
        );

        for (column, header) in table.headers().into_iter().enumerate() {
            group.append(
                self.text_line(header, column, 1)
                    .set("font-weight", "bold"),
            );
        }

        for (row_index, row) in table.rows.iter().enumerate() {
            for (column, cell) in row.iter().enumerate() {
                group.append(self.text_line(cell.clone(), column, row_index as u32 + 2));
            }
        }

        self.document.append(group);

        let row_count = table.rows.len() as u32 + 2;
        self.table_height += (row_count + 1) * TABLE_ROW_HEIGHT;
        self.width = self
            .width
            .max(table.columns.len() as u32 * TABLE_COLUMN_WIDTH);
        self.document.assign("width", self.width);
    }
}

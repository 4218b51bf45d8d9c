//! lopdf-based document composer.
//!
//! Builds a one-page PDF whose page is exactly as large as the image, one
//! PDF unit per pixel, with the longer edge horizontal. The image is an
//! uncompressed RGB XObject; the writer deflates streams on save.

use async_trait::async_trait;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::ports::{DocumentComposer, ExportError, RasterImage};

const IMAGE_NAME: &str = "Im0";

/// Document composer backed by `lopdf`.
#[derive(Debug, Clone, Default)]
pub struct LopdfDocumentComposer;

impl LopdfDocumentComposer {
    pub fn new() -> Self {
        Self
    }

    /// Landscape page size for an image: the longer edge becomes the width.
    pub fn page_size(image_width: u32, image_height: u32) -> (u32, u32) {
        (
            image_width.max(image_height),
            image_width.min(image_height),
        )
    }

    /// Writes the PDF synchronously.
    pub fn build(image: &RasterImage) -> Result<Vec<u8>, ExportError> {
        let (width, height) = (image.width(), image.height());
        let (page_width, page_height) = Self::page_size(width, height);

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let image_stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8_i64,
            },
            image.rgb_bytes().to_vec(),
        );
        let image_id = doc.add_object(image_stream);

        // Image space is a unit square; scale it to the image and anchor the
        // top edge to the top of the page.
        let top = page_height as i64 - height as i64;
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        (width as i64).into(),
                        0_i64.into(),
                        0_i64.into(),
                        (height as i64).into(),
                        0_i64.into(),
                        top.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(IMAGE_NAME.as_bytes().to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let encoded = content
            .encode()
            .map_err(|e| ExportError::composition_failed(format!("content stream: {}", e)))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let resources_id = doc.add_object(dictionary! {
            "XObject" => dictionary! {
                IMAGE_NAME => image_id,
            },
        });

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(page_width as i64),
                Object::Integer(page_height as i64),
            ],
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => 1_i64,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| ExportError::composition_failed(format!("write: {}", e)))?;
        Ok(buffer)
    }
}

#[async_trait]
impl DocumentComposer for LopdfDocumentComposer {
    async fn compose(&self, image: &RasterImage) -> Result<Vec<u8>, ExportError> {
        let image = image.clone();
        tokio::task::spawn_blocking(move || Self::build(&image))
            .await
            .map_err(|e| ExportError::composition_failed(format!("compose task failed: {}", e)))?
    }
}

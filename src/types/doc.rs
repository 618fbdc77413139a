use std::path::Path;

use crate::{
    traits::DrawingBackend,
    types::{
        BlockMetrics,
        BlockRenderer,
        Decorator,
        Error,
        ExportJob,
        FlowController,
        LayoutConstants,
        PdfWriter
}};

/// A sealed export: the backend's byte stream and the number of pages it holds.
///
/// Nothing can be drawn onto a `Document`; it only hands its bytes to a sink.
#[derive(Debug,Clone,PartialEq)]
pub struct Document {
    bytes: Vec<u8>,
    page_count: u32,
}

impl Document {
    /// renders a job to PDF with a fresh `PdfWriter`
    pub fn render(job: &ExportJob, layout: LayoutConstants) -> Result<Document, Error> {
        let mut writer = PdfWriter::default();

        DocumentBuilder::new(layout)
            .with_backend(&mut writer)
            .build(job)
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// writes the bytes to `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        std::fs::write(path.as_ref(), &self.bytes)?;
        log::info!("saved {} bytes to {}", self.bytes.len(), path.as_ref().display());
        Ok(())
    }
}

/// # Main entry point of the engine
///
/// Lays an `ExportJob` out onto a drawing backend in a single pass and seals the result.
///
/// ```
/// use notes_export::types::{DocumentBuilder, ExportJob, LayoutConstants, PdfWriter};
///
/// let job = ExportJob::new(Vec::new(), "Notes+", "Full export");
/// let mut writer = PdfWriter::default();
///
/// let document = DocumentBuilder::new(LayoutConstants::default())
///     .with_backend(&mut writer)
///     .build(&job)
///     .unwrap();
///
/// assert_eq!(document.page_count(), 1);
/// ```
pub struct DocumentBuilder<'b> {
    layout: LayoutConstants,
    backend: Option<&'b mut dyn DrawingBackend>,
}

impl<'b> DocumentBuilder<'b> {
    pub fn new(layout: LayoutConstants) -> Self {
        DocumentBuilder {
            layout,
            backend: None,
        }
    }

    /// builder function supplying the canvas; it stays borrowed until `build` returns
    pub fn with_backend(mut self, backend: &'b mut dyn DrawingBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Draws every record in the job's order and seals the document.
    ///
    /// Either a complete document comes back or an error does; on error the backend is
    /// reset so no partial pages survive.
    pub fn build(self, job: &ExportJob) -> Result<Document, Error> {
        let backend = self.backend.ok_or(Error::BackendUnavailable)?;
        let layout = &self.layout;

        layout.validate(backend.page_width(), backend.page_height())?;
        backend.reset();

        let decorator = Decorator::new(&job.title_text, &job.subtitle_text, layout);
        let mut flow = FlowController::new(decorator, layout, backend.page_height());
        let renderer = BlockRenderer::new(layout);

        flow.begin(backend);

        for record in &job.records {
            let metrics = BlockMetrics::measure(backend, record, layout);

            flow.ensure_space(backend, metrics.height());
            renderer.draw(backend, &mut flow, record, &metrics);
        }

        let page_count = flow.finish(backend);

        let bytes = match backend.finalize() {
            Ok(bytes) => bytes,
            Err(e) => {
                backend.reset();
                return Err(e);
            }
        };

        log::info!("sealed {} records on {page_count} pages ({} bytes)", job.records.len(), bytes.len());

        Ok(Document { bytes, page_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_backend_no_document() {
        let job = ExportJob::new(Vec::new(), "Notes+", "");
        let result = DocumentBuilder::new(LayoutConstants::default()).build(&job);

        assert!(matches!(result, Err(Error::BackendUnavailable)));
    }

    #[test]
    fn invalid_layout_fails_before_drawing() {
        let layout = LayoutConstants { margin: 200.0, ..LayoutConstants::default() };
        let job = ExportJob::new(Vec::new(), "Notes+", "");
        let mut writer = PdfWriter::default();

        let result = DocumentBuilder::new(layout).with_backend(&mut writer).build(&job);

        assert!(matches!(result, Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn renders_a_pdf() {
        let job = ExportJob::new(Vec::new(), "Notes+", "Full export");
        let document = Document::render(&job, LayoutConstants::default()).unwrap();

        assert_eq!(document.page_count(), 1);
        assert!(document.as_bytes().starts_with(b"%PDF-"));
    }
}

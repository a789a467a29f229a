use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use image::ImageFormat;
use pdfium_render::prelude::*;
use tokio::sync::{mpsc, oneshot};

use crate::application::ports::ExtractionError;

const POINTS_PER_INCH: f32 = 72.0;

type RenderReply = oneshot::Sender<Result<Vec<u8>, ExtractionError>>;

struct RenderJob {
    page_index: usize,
    dpi: u32,
    reply: RenderReply,
}

fn render_error(page: usize, message: impl Into<String>) -> ExtractionError {
    ExtractionError::RenderFailed {
        page,
        message: message.into(),
    }
}

/// Handle to a dedicated thread that binds pdfium and parses one document
/// once, then rasterizes pages on request. Pdfium handles are not `Send`, so
/// they never leave that thread. Dropping the handle stops the thread.
pub(super) struct PdfRenderer {
    jobs: mpsc::UnboundedSender<RenderJob>,
}

impl PdfRenderer {
    pub(super) fn spawn(data: Arc<Vec<u8>>) -> Result<Self, ExtractionError> {
        let (jobs, queue) = mpsc::unbounded_channel();

        std::thread::Builder::new()
            .name("pdf-render".to_string())
            .spawn(move || run_render_loop(&data, queue))
            .map_err(|e| render_error(0, format!("failed to start render thread: {e}")))?;

        Ok(Self { jobs })
    }

    /// Renders one 1-based page to PNG bytes at `dpi`.
    pub(super) async fn render(
        &self,
        page_index: usize,
        dpi: u32,
    ) -> Result<Vec<u8>, ExtractionError> {
        let (reply, response) = oneshot::channel();

        self.jobs
            .send(RenderJob {
                page_index,
                dpi,
                reply,
            })
            .map_err(|_| render_error(page_index, "render thread has stopped"))?;

        response
            .await
            .map_err(|_| render_error(page_index, "render thread dropped the page"))?
    }
}

fn bind_pdfium() -> Result<Pdfium, PdfiumError> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./lib"))
        .or_else(|_| Pdfium::bind_to_system_library())?;
    Ok(Pdfium::new(bindings))
}

fn run_render_loop(data: &[u8], mut queue: mpsc::UnboundedReceiver<RenderJob>) {
    let pdfium = match bind_pdfium() {
        Ok(pdfium) => pdfium,
        Err(e) => return fail_all(queue, format!("pdfium bind failed: {e}")),
    };

    let doc = match pdfium.load_pdf_from_byte_slice(data, None) {
        Ok(doc) => doc,
        Err(e) => return fail_all(queue, format!("pdfium open failed: {e}")),
    };

    tracing::debug!(page_count = doc.pages().len(), "PDF loaded for rendering");

    while let Some(job) = queue.blocking_recv() {
        let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
            rasterize_page(&doc, job.page_index, job.dpi)
        }))
        .unwrap_or_else(|_| {
            Err(render_error(
                job.page_index,
                "OOM or panic during PDF rasterization",
            ))
        });

        // Receiver gone means the caller timed out.
        let _ = job.reply.send(result);
    }
}

fn fail_all(mut queue: mpsc::UnboundedReceiver<RenderJob>, message: String) {
    tracing::warn!(error = %message, "PDF rendering unavailable");

    while let Some(job) = queue.blocking_recv() {
        let _ = job
            .reply
            .send(Err(render_error(job.page_index, message.clone())));
    }
}

fn rasterize_page(
    doc: &PdfDocument<'_>,
    page_index: usize,
    dpi: u32,
) -> Result<Vec<u8>, ExtractionError> {
    let zero_based = page_index
        .checked_sub(1)
        .ok_or_else(|| render_error(page_index, "page indices start at 1"))?;

    let page = doc
        .pages()
        .get(zero_based as u16)
        .map_err(|e| render_error(page_index, format!("page access failed: {e}")))?;

    let scale = dpi as f32 / POINTS_PER_INCH;
    let width = (page.width().value * scale) as i32;
    let height = (page.height().value * scale) as i32;

    let bitmap = page
        .render_with_config(
            &PdfRenderConfig::new()
                .set_target_width(width)
                .set_target_height(height),
        )
        .map_err(|e| render_error(page_index, format!("render failed: {e}")))?;

    let mut png_bytes: Vec<u8> = Vec::new();
    bitmap
        .as_image()
        .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| render_error(page_index, format!("PNG encode failed: {e}")))?;

    Ok(png_bytes)
}

use super::BoxSpec;
use crate::error::Result;
use crate::mesh::MergedGeometry;

/// Merges boxes into a single indexed vertex/face buffer.
///
/// Each box contributes 24 vertices (four per face, flat outward normals) and
/// 12 triangles, appended in input order with indices rebased onto the shared
/// buffer. Overlapping boxes are not unioned; they simply share one buffer so
/// a renderer draws them as one solid. An empty slice yields an empty geometry.
///
/// # Errors
///
/// Returns a geometry error if any box is degenerate or non-finite; nothing
/// is returned for the boxes that preceded it.
pub fn merge_boxes(boxes: &[BoxSpec]) -> Result<MergedGeometry> {
    let mut merged = MergedGeometry::with_capacity(boxes.len() * 24, boxes.len() * 12);
    for spec in boxes {
        spec.append_to(&mut merged)?;
    }
    tracing::trace!(
        boxes = boxes.len(),
        vertices = merged.vertex_count(),
        "merged boxes"
    );
    Ok(merged)
}

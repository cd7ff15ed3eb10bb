use thiserror::Error;

use crate::utils;

/// Error types for the linalg module.
#[derive(Debug, Error)]
pub enum LinalgError {
    /// Source and destination hold a different number of points
    #[error("source and destination must hold the same number of points, got {0} and {1}")]
    MismatchedPointsLength(usize, usize),
}

/// Compute the dot product of two 3D vectors.
///
/// # Arguments
///
/// * `a` - The first vector.
/// * `b` - The second vector.
///
/// # Returns
///
/// The dot product of the two vectors.
pub fn dot_product3(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Multiply two row-major 3x3 matrices into a pre-allocated output.
///
/// # Arguments
///
/// * `a` - The left matrix.
/// * `b` - The right matrix.
/// * `m` - The output matrix holding `a * b`.
///
/// Example:
///
/// ```
/// use splatkit_3d::linalg::matmul33;
///
/// let a = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
/// let b = [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
/// let mut m = [[0.0; 3]; 3];
/// matmul33(&a, &b, &mut m);
/// assert_eq!(m, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
/// ```
pub fn matmul33(a: &[[f32; 3]; 3], b: &[[f32; 3]; 3], m: &mut [[f32; 3]; 3]) {
    for (i, row) in m.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            *val = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
}

/// Transform a set of 3D points by a rotation and translation.
///
/// Computes `dst = R * src + t` for every point, writing into a
/// pre-allocated destination of the same length as the source.
///
/// # Arguments
///
/// * `src_points` - The points to transform.
/// * `rotation` - The row-major rotation matrix.
/// * `translation` - The translation vector.
/// * `dst_points` - Pre-allocated storage for the transformed points.
///
/// Example:
///
/// ```
/// use splatkit_3d::linalg::transform_points3d;
///
/// let src_points = vec![[2.0, 2.0, 2.0], [3.0, 4.0, 5.0]];
/// let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let translation = [0.0, 0.0, 0.0];
/// let mut dst_points = vec![[0.0; 3]; src_points.len()];
/// transform_points3d(&src_points, &rotation, &translation, &mut dst_points).unwrap();
/// assert_eq!(dst_points, src_points);
/// ```
pub fn transform_points3d(
    src_points: &[[f32; 3]],
    rotation: &[[f32; 3]; 3],
    translation: &[f32; 3],
    dst_points: &mut [[f32; 3]],
) -> Result<(), LinalgError> {
    if src_points.len() != dst_points.len() {
        return Err(LinalgError::MismatchedPointsLength(
            src_points.len(),
            dst_points.len(),
        ));
    }

    let rotation_mat = utils::mat33_view(rotation);
    let translation_col = utils::col3_view(translation);

    // view of the source points as a Nx3 row-major matrix
    let points_in_src = {
        let src_points_slice = unsafe {
            std::slice::from_raw_parts(src_points.as_ptr() as *const f32, src_points.len() * 3)
        };
        faer::mat::from_row_major_slice(src_points_slice, src_points.len(), 3)
    };

    // mutable view of the destination points as a 3xN column-major matrix
    let mut points_in_dst = {
        let dst_points_slice = unsafe {
            std::slice::from_raw_parts_mut(
                dst_points.as_mut_ptr() as *mut f32,
                dst_points.len() * 3,
            )
        };
        faer::mat::from_column_major_slice_mut(dst_points_slice, 3, dst_points.len())
    };

    faer::linalg::matmul::matmul(
        &mut points_in_dst,
        rotation_mat,
        points_in_src.transpose(),
        None,
        1.0,
        faer::Parallelism::None,
    );

    let (tx, ty, tz) = (
        translation_col.read(0),
        translation_col.read(1),
        translation_col.read(2),
    );
    for mut col in points_in_dst.col_iter_mut() {
        col.write(0, col.read(0) + tx);
        col.write(1, col.read(1) + ty);
        col.write(2, col.read(2) + tz);
    }

    Ok(())
}

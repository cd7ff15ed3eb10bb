use glam::{Mat3, Mat4, Vec3};
use thiserror::Error;

/// Row-major world-to-camera rotation (3x3) and translation (3) pair.
pub type WorldToCamera = ([[f32; 3]; 3], [f32; 3]);

/// Error types for the extrinsics module.
#[derive(Debug, Error)]
pub enum ExtrinsicsError {
    /// The pose block needs at least 3 rows and 4 columns
    #[error("expected a pose of at least 3 rows and 4 columns, got {rows}x{cols}")]
    InvalidShape {
        /// Number of rows of the rejected pose
        rows: usize,
        /// Number of columns of the rejected pose
        cols: usize,
    },

    /// The buffer length disagrees with the declared shape
    #[error("buffer of {len} elements cannot hold a {rows}x{cols} row-major matrix")]
    InvalidBufferLength {
        /// Length of the rejected buffer
        len: usize,
        /// Declared number of rows
        rows: usize,
        /// Declared number of columns
        cols: usize,
    },
}

/// Convert a camera-to-world pose into world-to-camera rotation and translation.
///
/// The input is a row-major `[R | t]` block where `R` is the camera orientation
/// in world coordinates and `t` the camera position. The returned pair is
/// `(R^T, -R^T * t)`, which maps world points into the camera frame.
///
/// PRECONDITION: the rotation block is orthonormal. It is not validated; a
/// non-orthonormal block simply yields the transposed block.
///
/// # Arguments
///
/// * `c2w` - The camera-to-world pose as a row-major 3x4 block.
///
/// # Returns
///
/// The world-to-camera rotation and translation.
///
/// Example:
///
/// ```
/// use splatkit_3d::extrinsics::c2w_to_w2c;
///
/// let c2w = [
///     [1.0, 0.0, 0.0, 1.0],
///     [0.0, 1.0, 0.0, 2.0],
///     [0.0, 0.0, 1.0, 3.0],
/// ];
/// let (rotation, translation) = c2w_to_w2c(&c2w);
/// assert_eq!(translation, [-1.0, -2.0, -3.0]);
/// ```
pub fn c2w_to_w2c(c2w: &[[f32; 4]; 3]) -> WorldToCamera {
    // glam is column-major, the pose block is row-major
    let rotation = Mat3::from_cols(
        Vec3::new(c2w[0][0], c2w[1][0], c2w[2][0]),
        Vec3::new(c2w[0][1], c2w[1][1], c2w[2][1]),
        Vec3::new(c2w[0][2], c2w[1][2], c2w[2][2]),
    );
    let position = Vec3::new(c2w[0][3], c2w[1][3], c2w[2][3]);

    // R' = R^T
    let w2c_r = rotation.transpose();
    // t' = -R^T * t
    let w2c_t = -(w2c_r * position);

    (
        [
            [w2c_r.x_axis.x, w2c_r.y_axis.x, w2c_r.z_axis.x],
            [w2c_r.x_axis.y, w2c_r.y_axis.y, w2c_r.z_axis.y],
            [w2c_r.x_axis.z, w2c_r.y_axis.z, w2c_r.z_axis.z],
        ],
        [w2c_t.x, w2c_t.y, w2c_t.z],
    )
}

/// Convert a camera-to-world pose stored in a flat row-major buffer.
///
/// Reads the upper-left 3x4 block of a `rows x cols` matrix, so homogeneous
/// 4x4 poses and padded layouts are accepted as-is. Anything smaller than
/// 3x4, or a buffer whose length disagrees with the declared shape, is
/// rejected.
///
/// # Arguments
///
/// * `data` - The pose values, row-major.
/// * `rows` - Number of rows of the stored matrix.
/// * `cols` - Number of columns of the stored matrix.
///
/// # Returns
///
/// The world-to-camera rotation and translation.
///
/// Example:
///
/// ```
/// use splatkit_3d::extrinsics::c2w_to_w2c_from_slice;
///
/// let c2w = [
///     1.0, 0.0, 0.0, 1.0, //
///     0.0, 1.0, 0.0, 2.0, //
///     0.0, 0.0, 1.0, 3.0, //
///     0.0, 0.0, 0.0, 1.0,
/// ];
/// let (rotation, translation) = c2w_to_w2c_from_slice(&c2w, 4, 4).unwrap();
/// assert_eq!(translation, [-1.0, -2.0, -3.0]);
/// ```
pub fn c2w_to_w2c_from_slice(
    data: &[f32],
    rows: usize,
    cols: usize,
) -> Result<WorldToCamera, ExtrinsicsError> {
    if rows < 3 || cols < 4 {
        return Err(ExtrinsicsError::InvalidShape { rows, cols });
    }
    if data.len() != rows * cols {
        return Err(ExtrinsicsError::InvalidBufferLength {
            len: data.len(),
            rows,
            cols,
        });
    }

    let mut c2w = [[0.0; 4]; 3];
    for (i, row) in c2w.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            *val = data[i * cols + j];
        }
    }

    Ok(c2w_to_w2c(&c2w))
}

/// Convert a homogeneous camera-to-world matrix into world-to-camera parts.
///
/// The bottom row of the matrix is ignored.
///
/// # Arguments
///
/// * `c2w` - The homogeneous camera-to-world matrix.
///
/// # Returns
///
/// The world-to-camera rotation and translation.
pub fn c2w_to_w2c_from_mat4(c2w: &Mat4) -> WorldToCamera {
    let m = c2w.to_cols_array_2d();
    c2w_to_w2c(&[
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
    ])
}

/// Utility function to view a row-major 3x3 array as a faer matrix.
pub(crate) fn mat33_view(array: &[[f32; 3]; 3]) -> faer::MatRef<'_, f32> {
    let array_slice =
        unsafe { std::slice::from_raw_parts(array.as_ptr() as *const f32, array.len() * 3) };
    faer::mat::from_row_major_slice(array_slice, 3, 3)
}

/// Utility function to view a 3-element array as a faer column vector.
pub(crate) fn col3_view(array: &[f32; 3]) -> faer::ColRef<'_, f32> {
    faer::col::from_slice(array.as_slice())
}

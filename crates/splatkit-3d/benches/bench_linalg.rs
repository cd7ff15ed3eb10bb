use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use splatkit_3d::{extrinsics, linalg, transforms};

// transform_points3d_col using faer cols point by point
fn transform_points3d_col(
    src_points: &[[f32; 3]],
    rotation: &[[f32; 3]; 3],
    translation: &[f32; 3],
    dst_points: &mut [[f32; 3]],
) {
    assert_eq!(src_points.len(), dst_points.len());

    let rotation_mat = faer::Mat::<f32>::from_fn(3, 3, |i, j| rotation[i][j]);
    let translation_col = faer::col![translation[0], translation[1], translation[2]];

    for (point_dst, point_src) in dst_points.iter_mut().zip(src_points.iter()) {
        let point_src_col = faer::col![point_src[0], point_src[1], point_src[2]];
        let point_dst_col = &rotation_mat * point_src_col + &translation_col;
        for (i, point_dst_col_val) in point_dst_col.iter().enumerate().take(3) {
            point_dst[i] = *point_dst_col_val;
        }
    }
}

fn bench_transform_points3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_points3d");

    for num_points in [1000, 10000, 100000].iter() {
        group.throughput(criterion::Throughput::Elements(*num_points as u64));
        let parameter_string = format!("{}", num_points);

        let src_points = vec![[2.0, 2.0, 2.0]; *num_points];
        let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let translation = [0.0, 0.0, 0.0];
        let dst_points = vec![[0.0; 3]; src_points.len()];

        group.bench_with_input(
            BenchmarkId::new("transform_points3d", &parameter_string),
            &(&src_points, &rotation, &translation, &dst_points),
            |b, i| {
                let (src, rot, trans, mut dst) = (i.0, i.1, i.2, i.3.clone());
                b.iter(|| {
                    linalg::transform_points3d(src, rot, trans, &mut dst).unwrap();
                    black_box(());
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("transform_points3d_col", &parameter_string),
            &(&src_points, &rotation, &translation, &dst_points),
            |b, i| {
                let (src, rot, trans, mut dst) = (i.0, i.1, i.2, i.3.clone());
                b.iter(|| {
                    transform_points3d_col(src, rot, trans, &mut dst);
                    black_box(());
                });
            },
        );
    }
}

fn matmul33_dot(a: &[[f32; 3]; 3], b: &[[f32; 3]; 3], m: &mut [[f32; 3]; 3]) {
    let row0 = &a[0];
    let row1 = &a[1];
    let row2 = &a[2];

    let col0 = &[b[0][0], b[1][0], b[2][0]];
    let col1 = &[b[0][1], b[1][1], b[2][1]];
    let col2 = &[b[0][2], b[1][2], b[2][2]];

    m[0][0] = linalg::dot_product3(row0, col0);
    m[0][1] = linalg::dot_product3(row0, col1);
    m[0][2] = linalg::dot_product3(row0, col2);

    m[1][0] = linalg::dot_product3(row1, col0);
    m[1][1] = linalg::dot_product3(row1, col1);
    m[1][2] = linalg::dot_product3(row1, col2);

    m[2][0] = linalg::dot_product3(row2, col0);
    m[2][1] = linalg::dot_product3(row2, col1);
    m[2][2] = linalg::dot_product3(row2, col2);
}

fn bench_matmul33(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul33");

    let a_mat = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
    let b_mat = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
    let mut m_mat = [[0.0; 3]; 3];

    group.bench_function(BenchmarkId::new("matmul33", ""), |b| {
        b.iter(|| {
            linalg::matmul33(&a_mat, &b_mat, &mut m_mat);
            black_box(());
        });
    });

    group.bench_function(BenchmarkId::new("matmul33_dot", ""), |b| {
        b.iter(|| {
            matmul33_dot(&a_mat, &b_mat, &mut m_mat);
            black_box(());
        });
    });
}

fn bench_c2w_to_w2c(c: &mut Criterion) {
    let mut group = c.benchmark_group("c2w_to_w2c");

    let rotation =
        transforms::axis_angle_to_rotation_matrix(&[0.3, -1.0, 0.5], 1.1).unwrap();
    let mut c2w = [[0.0f32; 4]; 3];
    let position = [2.0, -0.5, 4.0];
    for (row, (rot_row, pos)) in c2w.iter_mut().zip(rotation.iter().zip(position.iter())) {
        row[..3].copy_from_slice(rot_row);
        row[3] = *pos;
    }

    let mut flat = Vec::with_capacity(12);
    for row in &c2w {
        flat.extend_from_slice(row);
    }

    group.bench_function(BenchmarkId::new("c2w_to_w2c", ""), |b| {
        b.iter(|| {
            black_box(extrinsics::c2w_to_w2c(black_box(&c2w)));
        });
    });

    group.bench_function(BenchmarkId::new("c2w_to_w2c_from_slice", ""), |b| {
        b.iter(|| {
            black_box(extrinsics::c2w_to_w2c_from_slice(black_box(&flat), 3, 4).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_transform_points3d,
    bench_matmul33,
    bench_c2w_to_w2c
);
criterion_main!(benches);

use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softrast::bench::{FrameBuffer, ScanlineRasterizer, Triangle};
use softrast::math::{vec2::Vec2, vec3::Vec3, vec4::Vec4};
use softrast::texture::Texture;
use softrast::Engine;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

struct Buffers {
    color: Vec<u32>,
    depth: Vec<f32>,
}

impl Buffers {
    fn new() -> Self {
        let size = (BUFFER_WIDTH * BUFFER_HEIGHT) as usize;
        Self {
            color: vec![0u32; size],
            depth: vec![1.0f32; size],
        }
    }

    /// Resets depth so every iteration rasterizes the same number of pixels.
    fn framebuffer(&mut self) -> FrameBuffer<'_> {
        self.depth.fill(1.0);
        FrameBuffer::new(&mut self.color, &mut self.depth, BUFFER_WIDTH, BUFFER_HEIGHT)
    }
}

fn checker_texture() -> Rc<Texture> {
    let size = 64u32;
    let pixels = (0..size * size)
        .map(|i| {
            if ((i % size) / 8 + (i / size) / 8) % 2 == 0 {
                0xFFFF_FFFF
            } else {
                0xFF20_2020
            }
        })
        .collect();
    Rc::new(Texture::from_pixels(pixels, size, size))
}

fn triangle(xy: [(f32, f32); 3], w: [f32; 3], texture: Option<Rc<Texture>>) -> Triangle {
    Triangle::new(
        [
            Vec4::new(xy[0].0, xy[0].1, 0.5, w[0]),
            Vec4::new(xy[1].0, xy[1].1, 0.5, w[1]),
            Vec4::new(xy[2].0, xy[2].1, 0.5, w[2]),
        ],
        [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)],
        0xFFFF0000,
        texture,
    )
}

fn sized_triangles(texture: Option<Rc<Texture>>) -> [(&'static str, Triangle); 3] {
    let w = [2.0, 4.0, 3.0];
    [
        (
            "small",
            triangle([(100.0, 100.0), (120.0, 100.0), (110.0, 120.0)], w, texture.clone()),
        ),
        (
            "medium",
            triangle([(100.0, 100.0), (300.0, 100.0), (200.0, 300.0)], w, texture.clone()),
        ),
        (
            "large",
            triangle([(50.0, 50.0), (750.0, 100.0), (400.0, 550.0)], w, texture),
        ),
    ]
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let scanline = ScanlineRasterizer::new();

    for (name, tri) in sized_triangles(None) {
        group.bench_with_input(BenchmarkId::new("flat", name), &tri, |b, tri| {
            let mut buffers = Buffers::new();
            b.iter(|| {
                let mut fb = buffers.framebuffer();
                scanline.fill_triangle(black_box(tri), &mut fb);
            });
        });
    }

    for (name, tri) in sized_triangles(Some(checker_texture())) {
        group.bench_with_input(BenchmarkId::new("textured", name), &tri, |b, tri| {
            let mut buffers = Buffers::new();
            b.iter(|| {
                let mut fb = buffers.framebuffer();
                scanline.texture_triangle(black_box(tri), &mut fb);
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let scanline = ScanlineRasterizer::new();
    let texture = checker_texture();

    // Generate a grid of small triangles
    let triangles: Vec<Triangle> = (0..20)
        .flat_map(|row| {
            let texture = Rc::clone(&texture);
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                triangle(
                    [(x, y), (x + 35.0, y), (x + 17.5, y + 25.0)],
                    [2.0, 2.5, 3.0],
                    Some(Rc::clone(&texture)),
                )
            })
        })
        .collect();

    group.bench_function("flat_400_triangles", |b| {
        let mut buffers = Buffers::new();
        b.iter(|| {
            let mut fb = buffers.framebuffer();
            for tri in &triangles {
                scanline.fill_triangle(black_box(tri), &mut fb);
            }
        });
    });

    group.bench_function("textured_400_triangles", |b| {
        let mut buffers = Buffers::new();
        b.iter(|| {
            let mut fb = buffers.framebuffer();
            for tri in &triangles {
                scanline.texture_triangle(black_box(tri), &mut fb);
            }
        });
    });

    group.finish();
}

fn benchmark_frame(c: &mut Criterion) {
    let mut engine = Engine::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    let cube = engine.load_cube_mesh();
    if let Some(mesh) = engine.mesh_mut(cube) {
        mesh.set_texture(Some(checker_texture()));
        mesh.transform_mut()
            .set_translation(Vec3::new(0.0, 0.0, 4.0))
            .rotate_y(0.6)
            .rotate_x(0.4);
    }

    c.bench_function("cube_frame", |b| {
        b.iter(|| {
            black_box(engine.update());
            engine.render();
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_frame
);
criterion_main!(benches);

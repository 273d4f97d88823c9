use std::path::Path;

use log::info;
use softrast::prelude::*;

const PITCH_SPEED: f32 = 15.0; // radians per second of held key
const YAW_SPEED: f32 = 5.0;
const MOVE_SPEED: f32 = 15.0; // world units per second

fn handle_key(engine: &mut Engine, key: Key, delta_time: f32) {
    match key {
        Key::W => engine.camera_mut().rotate_pitch(PITCH_SPEED * delta_time),
        Key::S => engine.camera_mut().rotate_pitch(-PITCH_SPEED * delta_time),
        Key::Right => engine.camera_mut().rotate_yaw(YAW_SPEED * delta_time),
        Key::Left => engine.camera_mut().rotate_yaw(-YAW_SPEED * delta_time),
        Key::Up => engine.camera_mut().move_forward(MOVE_SPEED * delta_time),
        Key::Down => engine.camera_mut().move_backward(MOVE_SPEED * delta_time),
        Key::C => engine.set_cull_mode(CullMode::Backface),
        Key::X => engine.set_cull_mode(CullMode::None),
        Key::Num1 | Key::Num2 | Key::Num3 | Key::Num4 | Key::Num5 | Key::Num6 => {
            let index = key as usize - Key::Num1 as usize;
            let mode = RenderMode::ALL[index];
            info!("render mode: {}", mode);
            engine.set_render_mode(mode);
        }
    }
}

/// Usage: `softrast [model.obj [texture.png]]`. Without arguments a cube is shown.
fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut window = Window::new("softrast", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut engine = Engine::new(WINDOW_WIDTH, WINDOW_HEIGHT);

    let mesh = match args.first() {
        Some(obj) => engine
            .load_mesh(obj, args.get(1).map(Path::new))
            .map_err(|e| e.to_string())?,
        None => engine.load_cube_mesh(),
    };
    if let Some(mesh) = engine.mesh_mut(mesh) {
        mesh.transform_mut().set_translation_xyz(0.0, 0.0, 5.0);
    }

    let mut frame_limiter = FrameLimiter::new(&window);
    let mut delta_time = 0.0;

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(w, h) => {
                    window.resize(w, h)?;
                    engine.resize(w, h);
                }
                WindowEvent::KeyDown(key) => handle_key(&mut engine, key, delta_time),
            }
        }

        delta_time = frame_limiter.wait_and_get_delta(&window) as f32 / 1000.0;

        engine.update();
        engine.render();
        window.present(engine.frame_buffer())?;
    }

    Ok(())
}

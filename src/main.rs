fn main() {
    canvas_shooter::game::run();
}

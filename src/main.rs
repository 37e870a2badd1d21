fn main() {
    tower_defense::game::run();
}

fn main() {
    pubapp::mount();
}

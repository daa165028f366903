//! End-to-end smoke test exercising the facade's re-exports against a mock
//! terminal: a bordered box containing a focused `Input`, rendered and then
//! edited through the renderer's input routing.

use std::cell::RefCell;
use std::rc::Rc;

use flowtui::prelude::*;

#[test]
fn bordered_input_renders_and_accepts_keystrokes() {
    let input = Rc::new(RefCell::new(Input::new().with_placeholder("name")));
    input.borrow_mut().set_focused(true);

    let mut container = Container::new();
    container.push(input.clone());
    let boxed = Rc::new(RefCell::new(
        BorderedBox::new().with_title("Sign in").with_border(BorderSet::ROUNDED),
    ));
    boxed.borrow_mut().push(container_as_component(container));

    let terminal = MockTerminal::new(40, 10);
    let mut renderer = Renderer::new(terminal, boxed.clone(), RendererOptions::default());

    renderer.set_focus(&(input.clone() as Rc<RefCell<dyn Focusable>>));
    renderer.render_frame().unwrap();

    input.borrow_mut().handle_input(&KeyEvent::new(KeyCode::Char('h')));
    input.borrow_mut().handle_input(&KeyEvent::new(KeyCode::Char('i')));
    boxed.borrow_mut().invalidate();
    renderer.render_frame().unwrap();

    assert_eq!(input.borrow().value(), "hi");
}

fn container_as_component(container: Container) -> Rc<RefCell<dyn Component>> {
    Rc::new(RefCell::new(container))
}

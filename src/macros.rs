/// Builds a tree from `key => value` pairs.
///
/// The result is an empty root whose children are the listed nodes. A pair
/// followed by `=> { ... }` gets the nested pairs as its children.
///
/// # Examples
///
/// ```rust
/// use valtree::valtree;
///
/// let tree = valtree! {
///     "name" => "probe",
///     "engine" => "" => {
///         "thrust" => "4500",
///         "fuel" => "hydrazine",
///     },
/// };
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.query("engine.thrust").map(|n| n.as_i64()), Some(4500));
/// ```
#[macro_export]
macro_rules! valtree {
    () => {
        $crate::Node::empty()
    };

    ( $( $key:expr => $value:expr $( => { $($inner:tt)* } )? ),+ $(,)? ) => {{
        let mut root = $crate::Node::empty();
        $(
            #[allow(unused_mut)]
            let mut child = $crate::Node::new($key, $value);
            $( child.extend($crate::valtree!{ $($inner)* }); )?
            root.add_child(child);
        )+
        root
    }};
}

use crate::model::PlayerId;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AvatarProps {
    pub player_id: PlayerId,
    pub photo_url: AttrValue,
    pub alt: AttrValue,
    #[prop_or(false)]
    pub small: bool,
}

fn placeholder_url(player_id: &PlayerId) -> String {
    format!("https://picsum.photos/seed/{player_id}/200")
}

#[function_component(AvatarComp)]
pub fn avatar(props: &AvatarProps) -> Html {
    let src = if props.photo_url.is_empty() {
        placeholder_url(&props.player_id)
    } else {
        props.photo_url.to_string()
    };

    let class = classes!(
        "futsal-avatar",
        props.small.then_some("futsal-avatar--small")
    );

    html! {
        <img {class} {src} alt={props.alt.clone()} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn placeholder_is_deterministic_per_id() {
        let id = Uuid::new_v4();
        assert_eq!(placeholder_url(&id), placeholder_url(&id));
        assert!(placeholder_url(&id).contains(&id.to_string()));
    }

    #[test]
    fn different_ids_get_different_placeholders() {
        assert_ne!(
            placeholder_url(&Uuid::new_v4()),
            placeholder_url(&Uuid::new_v4())
        );
    }
}

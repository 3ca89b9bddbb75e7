use crate::constants::*;
use crate::dom;
use crate::style;
use starfield_core::{MediaElement, MediaError, PlayerController, PlayerView};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `MediaElement` over the page's `<audio>` element.
pub struct DomMedia(pub web::HtmlMediaElement);

impl MediaElement for DomMedia {
    fn paused(&self) -> bool {
        self.0.paused()
    }

    fn play(&mut self) -> Result<(), MediaError> {
        let promise: js_sys::Promise = self
            .0
            .play()
            .map_err(|e| MediaError::PlayRejected(format!("{:?}", e)))?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] play rejected by host: {:?}", e);
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        let _ = self.0.pause();
    }

    fn current_time(&self) -> f64 {
        self.0.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.0.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.0.duration()
    }
}

pub struct DomPlayerView {
    icon_play: web::Element,
    icon_pause: web::Element,
    card: Option<web::Element>,
    progress_fill: web::HtmlElement,
    elapsed: web::Element,
    total: web::Element,
}

impl PlayerView for DomPlayerView {
    fn show_playing(&mut self, playing: bool) {
        dom::set_hidden(&self.icon_play, playing);
        dom::set_hidden(&self.icon_pause, !playing);
        if let Some(card) = &self.card {
            let cl = card.class_list();
            if playing {
                _ = cl.add_1(PLAYING_CLASS);
            } else {
                _ = cl.remove_1(PLAYING_CLASS);
            }
        }
    }

    fn set_progress_percent(&mut self, percent: f64) {
        let _ = self
            .progress_fill
            .style()
            .set_property("width", &style::percent(percent));
    }

    fn set_elapsed_text(&mut self, text: &str) {
        self.elapsed.set_text_content(Some(text));
    }

    fn set_total_text(&mut self, text: &str) {
        self.total.set_text_content(Some(text));
    }
}

type DomPlayer = PlayerController<DomMedia, DomPlayerView>;

/// Look up the player's elements and hook the controller to its events.
pub fn wire_player(document: &web::Document) -> anyhow::Result<()> {
    let audio: web::HtmlMediaElement = dom::element_by_id(document, AUDIO_ID)?;
    let play_button: web::Element = dom::element_by_id(document, PLAY_BUTTON_ID)?;
    let progress_container: web::HtmlElement = dom::element_by_id(document, PROGRESS_CONTAINER_ID)?;

    let view = DomPlayerView {
        icon_play: dom::query(&play_button, ICON_PLAY_SELECTOR)?,
        icon_pause: dom::query(&play_button, ICON_PAUSE_SELECTOR)?,
        card: dom::query_document(document, PLAYER_CARD_SELECTOR).ok(),
        progress_fill: dom::element_by_id(document, PROGRESS_FILL_ID)?,
        elapsed: dom::query_document(document, CURRENT_TIME_SELECTOR)?,
        total: dom::query_document(document, TOTAL_TIME_SELECTOR)?,
    };
    let player: Rc<RefCell<DomPlayer>> = Rc::new(RefCell::new(PlayerController::new(
        DomMedia(audio.clone()),
        view,
    )));

    {
        let player = player.clone();
        dom::add_click_listener(&play_button, move || {
            player.borrow_mut().toggle();
        });
    }
    {
        let player = player.clone();
        dom::on_event(&audio, "timeupdate", move |_: web::Event| {
            player.borrow_mut().on_time_update();
        });
    }
    {
        let player = player.clone();
        dom::on_event(&audio, "loadedmetadata", move |_: web::Event| {
            player.borrow_mut().on_metadata_loaded();
        });
    }
    {
        let player = player.clone();
        dom::on_event(&audio, "ended", move |_: web::Event| {
            player.borrow_mut().on_ended();
        });
    }
    // Metadata may already be in when the page is restored from cache.
    player.borrow_mut().on_metadata_loaded();
    {
        let track = progress_container.clone();
        dom::on_event(&progress_container, "click", move |ev: web::MouseEvent| {
            let width = track.client_width() as f64;
            player.borrow_mut().seek(ev.offset_x() as f64, width);
        });
    }

    log::info!("[audio] player wired");
    Ok(())
}

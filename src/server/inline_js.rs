/// Behavior script for the editor page: feeds edits to the host, relays
/// sandbox messages, polls the console store, and handles the clipboard,
/// device frames, theme picker, and clear/format actions.
pub(super) fn build_inline_js() -> String {
    INLINE_JS.to_string()
}

const INLINE_JS: &str = r#"<script>
(function() {
  function $(id) { return document.getElementById(id); }

  function toast(message, kind) {
    var el = document.createElement('div');
    el.className = 'toast' + (kind ? ' ' + kind : '');
    el.textContent = message;
    $('toasts').appendChild(el);
    setTimeout(function() { el.remove(); }, 3000);
  }

  function post(url, body) {
    return fetch(url, {
      method: 'POST',
      headers: body === undefined ? {} : { 'Content-Type': 'application/json' },
      body: body === undefined ? undefined : JSON.stringify(body)
    });
  }

  // Editor surfaces: every input event feeds the host; the host debounces.
  ['markup', 'style', 'script'].forEach(function(editor) {
    var area = $('ed-' + editor);
    area.addEventListener('input', function() {
      post('/update', { editor: editor, content: area.value }).catch(function() {});
    });
  });

  // Relay sandbox messages to the host verbatim; the host decides validity.
  window.addEventListener('message', function(event) {
    var raw;
    try { raw = JSON.stringify(event.data); } catch (e) { return; }
    if (raw === undefined) return;
    fetch('/console', { method: 'POST', body: raw }).catch(function() {});
  });

  // Console panel poll.
  var lastCount = -1;
  var lastVisible = null;
  function renderConsole(data) {
    if (data.entries.length === lastCount && data.visible === lastVisible) return;
    lastCount = data.entries.length;
    lastVisible = data.visible;
    $('console-count').textContent = data.entries.length;
    var body = $('console-body');
    body.style.display = data.visible ? '' : 'none';
    body.innerHTML = '';
    data.entries.forEach(function(entry) {
      var row = document.createElement('div');
      row.className = 'console-row sev-' + entry.severity;
      var time = document.createElement('span');
      time.className = 'console-time';
      time.textContent = entry.timestamp;
      var msg = document.createElement('span');
      msg.className = 'console-msg';
      msg.textContent = entry.message;
      row.appendChild(time);
      row.appendChild(msg);
      body.appendChild(row);
    });
    body.scrollTop = body.scrollHeight;
  }
  setInterval(function() {
    fetch('/console.json')
      .then(function(r) { return r.json(); })
      .then(renderConsole)
      .catch(function() {});
  }, 500);

  $('console-toggle').addEventListener('click', function() {
    post('/console/toggle').catch(function() {});
  });
  $('console-clear').addEventListener('click', function() {
    post('/console/clear').catch(function() {});
  });

  // Device frames resize the wrapper only; the sandbox never reloads.
  var frameButtons = document.querySelectorAll('[data-frame]');
  frameButtons.forEach(function(btn) {
    btn.addEventListener('click', function() {
      frameButtons.forEach(function(b) { b.classList.remove('active'); });
      btn.classList.add('active');
      var w = btn.dataset.w;
      var h = btn.dataset.h;
      $('frame-wrapper').style.width = w ? w + 'px' : '100%';
      $('preview').style.height = h + 'px';
      $('frame-chrome').style.display = w ? 'block' : 'none';
      $('frame-dims').textContent = w ? w + ' x ' + h : '';
    });
  });

  // Clipboard: success and failure both surface as a toast, never a crash.
  document.querySelectorAll('[data-copy]').forEach(function(btn) {
    btn.addEventListener('click', function() {
      var area = $('ed-' + btn.dataset.copy);
      navigator.clipboard.writeText(area.value).then(
        function() { toast(btn.dataset.label + ' code copied to clipboard'); },
        function() { toast('Failed to copy code to clipboard', 'error'); }
      );
    });
  });

  $('theme').addEventListener('change', function() {
    var id = $('theme').value;
    post('/theme', { theme: id }).then(
      function() {
        document.body.className = 'theme-' + id;
        toast('Theme updated');
      },
      function() { toast('Failed to change theme', 'error'); }
    );
  });

  $('format-btn').addEventListener('click', function() {
    post('/format')
      .then(function(r) { return r.json(); })
      .then(function(data) {
        $('ed-markup').value = data.markup;
        $('ed-style').value = data.style;
        $('ed-script').value = data.script;
        if (data.changed) { toast('Code formatted'); } else { toast('No code to format', 'info'); }
      })
      .catch(function() { toast('Error formatting code', 'error'); });
  });

  $('clear-btn').addEventListener('click', function() {
    if (!window.confirm('Clear all code? This will remove all HTML, CSS and JavaScript. This cannot be undone.')) return;
    post('/clear').then(
      function() {
        $('ed-markup').value = '';
        $('ed-style').value = '';
        $('ed-script').value = '';
        toast('All code cleared');
      },
      function() { toast('Failed to clear', 'error'); }
    );
  });
})();
</script>"#;

//! State library store modules and their persistence glue.
//!
//! These files are plain TypeScript with no UI, so the same text serves
//! both platforms.

use trellis_core::domain::{ProjectConfig, StateManagement};

// ── Redux Toolkit ─────────────────────────────────────────────────────────────

const REDUX_SLICE: &str = r#"import { createSlice, type PayloadAction } from '@reduxjs/toolkit';

export interface CounterState {
  value: number;
}

const initialState: CounterState = { value: 0 };

const counterSlice = createSlice({
  name: 'counter',
  initialState,
  reducers: {
    increment(state) {
      state.value += 1;
    },
    decrement(state) {
      state.value -= 1;
    },
    incrementBy(state, action: PayloadAction<number>) {
      state.value += action.payload;
    },
    reset() {
      return initialState;
    },
  },
});

export const { increment, decrement, incrementBy, reset } = counterSlice.actions;
export default counterSlice.reducer;
"#;

const REDUX_STORE: &str = r#"import { configureStore } from '@reduxjs/toolkit';
import counterReducer from './counterSlice';

export const store = configureStore({
  reducer: {
    counter: counterReducer,
  },
});

export type RootState = ReturnType<typeof store.getState>;
export type AppDispatch = typeof store.dispatch;
"#;

const REDUX_HOOKS: &str = r#"import { useDispatch, useSelector } from 'react-redux';
import type { AppDispatch, RootState } from './store';

export const useAppDispatch = useDispatch.withTypes<AppDispatch>();
export const useAppSelector = useSelector.withTypes<RootState>();
"#;

const REDUX_PERSIST: &str = r#"import { combineReducers, configureStore } from '@reduxjs/toolkit';
import {
  FLUSH,
  PAUSE,
  PERSIST,
  PURGE,
  REGISTER,
  REHYDRATE,
  persistReducer,
  persistStore,
} from 'redux-persist';
import counterReducer from './counterSlice';
import { storage } from '../storage/storage';

const rootReducer = combineReducers({ counter: counterReducer });

const persistedReducer = persistReducer({ key: 'root', version: 1, storage }, rootReducer);

export const persistedStore = configureStore({
  reducer: persistedReducer,
  middleware: (getDefaultMiddleware) =>
    getDefaultMiddleware({
      serializableCheck: {
        ignoredActions: [FLUSH, REHYDRATE, PAUSE, PERSIST, PURGE, REGISTER],
      },
    }),
});

export const persistor = persistStore(persistedStore);
"#;

pub fn redux_slice(_: &ProjectConfig) -> String {
    REDUX_SLICE.to_string()
}

pub fn redux_store(_: &ProjectConfig) -> String {
    REDUX_STORE.to_string()
}

pub fn redux_hooks(_: &ProjectConfig) -> String {
    REDUX_HOOKS.to_string()
}

pub fn redux_persist(_: &ProjectConfig) -> String {
    REDUX_PERSIST.to_string()
}

// ── Zustand ───────────────────────────────────────────────────────────────────

const ZUSTAND_STORE: &str = r#"import { create } from 'zustand';

export interface CounterState {
  count: number;
  increment: () => void;
  decrement: () => void;
  reset: () => void;
}

export const useCounterStore = create<CounterState>()((set) => ({
  count: 0,
  increment: () => set((state) => ({ count: state.count + 1 })),
  decrement: () => set((state) => ({ count: state.count - 1 })),
  reset: () => set({ count: 0 }),
}));
"#;

const ZUSTAND_PERSIST: &str = r#"import { create } from 'zustand';
import { createJSONStorage, persist } from 'zustand/middleware';
import type { CounterState } from './useCounterStore';
import { storage } from '../storage/storage';

export const usePersistedCounterStore = create<CounterState>()(
  persist(
    (set) => ({
      count: 0,
      increment: () => set((state) => ({ count: state.count + 1 })),
      decrement: () => set((state) => ({ count: state.count - 1 })),
      reset: () => set({ count: 0 }),
    }),
    {
      name: 'counter',
      storage: createJSONStorage(() => storage),
    },
  ),
);
"#;

pub fn zustand_store(_: &ProjectConfig) -> String {
    ZUSTAND_STORE.to_string()
}

pub fn zustand_persist(_: &ProjectConfig) -> String {
    ZUSTAND_PERSIST.to_string()
}

// ── MobX ──────────────────────────────────────────────────────────────────────

const MOBX_STORE: &str = r#"import { makeAutoObservable } from 'mobx';

export class CounterStore {
  count = 0;

  constructor() {
    makeAutoObservable(this);
  }

  increment() {
    this.count += 1;
  }

  decrement() {
    this.count -= 1;
  }

  reset() {
    this.count = 0;
  }
}
"#;

const MOBX_CONTEXT: &str = r#"import { createContext, useContext, useState, type ReactNode } from 'react';
import { CounterStore } from './CounterStore';

const StoreContext = createContext<CounterStore | null>(null);

export function StoreProvider({ children }: { children: ReactNode }) {
  const [store] = useState(() => new CounterStore());
  return <StoreContext.Provider value={store}>{children}</StoreContext.Provider>;
}

export function useCounterStore(): CounterStore {
  const store = useContext(StoreContext);
  if (!store) {
    throw new Error('useCounterStore must be used inside <StoreProvider>');
  }
  return store;
}
"#;

const MOBX_PERSIST: &str = r#"import { makePersistable } from 'mobx-persist-store';
import type { CounterStore } from './CounterStore';
import { storage } from '../storage/storage';

export function persistCounterStore(store: CounterStore): Promise<void> {
  return makePersistable(store, {
    name: 'CounterStore',
    properties: ['count'],
    storage,
  }).then(() => undefined);
}
"#;

pub fn mobx_store(_: &ProjectConfig) -> String {
    MOBX_STORE.to_string()
}

pub fn mobx_context(_: &ProjectConfig) -> String {
    MOBX_CONTEXT.to_string()
}

pub fn mobx_persist(_: &ProjectConfig) -> String {
    MOBX_PERSIST.to_string()
}

// ── View wiring ───────────────────────────────────────────────────────────────

/// Fill the `{{STORE_IMPORTS}}`, `{{SIGNATURE}}`, `{{HOOKS}}` and
/// `{{SIGNATURE_END}}` slots of a component living one directory below
/// `src/`, so that it reads `count` and gets `onIncrement`/`onDecrement`.
pub fn bind_component(template: &str, component: &str, state: StateManagement) -> String {
    let (imports, hooks) = match state {
        StateManagement::Redux => (
            concat!(
                "import { useAppDispatch, useAppSelector } from '../store/hooks';\n",
                "import { decrement, increment } from '../store/counterSlice';\n",
            ),
            concat!(
                "  const count = useAppSelector((state) => state.counter.value);\n",
                "  const dispatch = useAppDispatch();\n",
                "  const onIncrement = () => dispatch(increment());\n",
                "  const onDecrement = () => dispatch(decrement());",
            ),
        ),
        StateManagement::Zustand => (
            "import { useCounterStore } from '../store/useCounterStore';\n",
            concat!(
                "  const count = useCounterStore((state) => state.count);\n",
                "  const onIncrement = useCounterStore((state) => state.increment);\n",
                "  const onDecrement = useCounterStore((state) => state.decrement);",
            ),
        ),
        StateManagement::Mobx => (
            concat!(
                "import { observer } from 'mobx-react-lite';\n",
                "import { useCounterStore } from '../store/StoreContext';\n",
            ),
            concat!(
                "  const store = useCounterStore();\n",
                "  const count = store.count;\n",
                "  const onIncrement = () => store.increment();\n",
                "  const onDecrement = () => store.decrement();",
            ),
        ),
    };
    // observer() wraps the component, so it cannot be the default export directly
    let (signature, end) = match state {
        StateManagement::Mobx => (
            format!("function {component}() {{"),
            format!("\n\nexport default observer({component});"),
        ),
        _ => (format!("export default function {component}() {{"), String::new()),
    };
    template
        .replace("{{STORE_IMPORTS}}", imports)
        .replace("{{SIGNATURE}}", &signature)
        .replace("{{HOOKS}}", hooks)
        .replace("{{SIGNATURE_END}}", &end)
}

/// Wrap the `{{OPEN}}`..`{{CLOSE}}` region of a root component in the state
/// library's provider. `store_dir` is the import path of `src/store` as seen
/// from the root component. Lines inside the region carry `{{INDENT}}`.
pub fn wrap_in_provider(template: &str, store_dir: &str, state: StateManagement) -> String {
    let (imports, open, close) = match state {
        StateManagement::Redux => (
            format!(
                "import {{ Provider }} from 'react-redux';\n\
                 import {{ store }} from '{store_dir}/store';\n"
            ),
            "    <Provider store={store}>\n",
            "    </Provider>\n",
        ),
        StateManagement::Mobx => (
            format!("import {{ StoreProvider }} from '{store_dir}/StoreContext';\n"),
            "    <StoreProvider>\n",
            "    </StoreProvider>\n",
        ),
        StateManagement::Zustand => (String::new(), "", ""),
    };
    let indent = if open.is_empty() { "" } else { "  " };
    template
        .replace("{{STORE_IMPORTS}}", &imports)
        .replace("{{OPEN}}", open)
        .replace("{{CLOSE}}", close)
        .replace("{{INDENT}}", indent)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPONENT: &str = "{{STORE_IMPORTS}}\n{{SIGNATURE}}\n{{HOOKS}}\n}{{SIGNATURE_END}}\n";
    const SLOTS: &str = "{{STORE_IMPORTS}}{{OPEN}}{{INDENT}}<App />\n{{CLOSE}}";

    #[test]
    fn mobx_components_are_observers() {
        let text = bind_component(COMPONENT, "Counter", StateManagement::Mobx);
        assert!(text.contains("function Counter() {"));
        assert!(!text.contains("export default function"));
        assert!(text.ends_with("export default observer(Counter);\n"));
    }

    #[test]
    fn redux_components_use_typed_hooks() {
        let text = bind_component(COMPONENT, "HomeScreen", StateManagement::Redux);
        assert!(text.contains("from '../store/hooks'"));
        assert!(text.contains("export default function HomeScreen() {"));
    }

    #[test]
    fn zustand_needs_no_provider() {
        let text = wrap_in_provider(SLOTS, "./store", StateManagement::Zustand);
        assert_eq!(text, "<App />\n");
    }

    #[test]
    fn redux_provider_imports_from_store_dir() {
        let text = wrap_in_provider(SLOTS, "./src/store", StateManagement::Redux);
        assert!(text.contains("import { store } from './src/store/store';"));
        assert!(text.contains("    <Provider store={store}>\n  <App />\n    </Provider>\n"));
    }
}
